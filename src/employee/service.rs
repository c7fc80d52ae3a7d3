//! Employee operations exposed by the facade.
//!
//! Each operation makes a fixed sequence of upstream calls, unwraps the
//! envelopes and optionally aggregates the result. The core keeps no state
//! of its own, so one instance serves all requests concurrently.

use crate::employee::aggregate;
use crate::employee::model::{CreateEmployeeRequest, DeleteEmployeeRequest, Employee};
use crate::error::{FacadeError, FacadeResult};
use crate::upstream::envelope::{self, Payload, Shape};
use crate::upstream::UpstreamClient;

/// Upstream collection path.
pub const EMPLOYEE_PATH: &str = "/employee";

/// Number of names returned by [`EmployeeCore::top_ten_highest_earning_names`].
pub const TOP_EARNERS: usize = 10;

#[derive(Debug, Clone)]
pub struct EmployeeCore {
    upstream: UpstreamClient,
}

impl EmployeeCore {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// Every employee known to the upstream.
    pub async fn all_employees(&self) -> FacadeResult<Vec<Employee>> {
        tracing::info!("Fetching all employees from upstream");
        let response = self.upstream.get(EMPLOYEE_PATH).await?;
        envelope::unwrap(response, Shape::List)?.into_list()
    }

    /// Employees whose name contains `search`, case-insensitively.
    pub async fn employees_by_name_search(&self, search: &str) -> FacadeResult<Vec<Employee>> {
        let employees = self.all_employees().await?;
        let matched = aggregate::filter_by_name_substring(&employees, search);
        tracing::info!(search = %search, matched = matched.len(), "Filtered employees by name");
        Ok(matched)
    }

    pub async fn employee_by_id(&self, id: &str) -> FacadeResult<Employee> {
        tracing::info!(id = %id, "Fetching employee by id");
        let response = self.upstream.get(&employee_path(id)).await?;
        envelope::unwrap(response, Shape::Single)?.into_single()
    }

    pub async fn highest_salary(&self) -> FacadeResult<u64> {
        let employees = self.all_employees().await?;
        aggregate::max_salary(&employees)
    }

    pub async fn top_ten_highest_earning_names(&self) -> FacadeResult<Vec<String>> {
        let employees = self.all_employees().await?;
        Ok(aggregate::top_n_names_by_salary(&employees, TOP_EARNERS))
    }

    pub async fn create_employee(&self, request: &CreateEmployeeRequest) -> FacadeResult<Employee> {
        tracing::info!(request = ?request, "Creating employee");
        let response = self.upstream.post(EMPLOYEE_PATH, request).await?;
        envelope::unwrap(response, Shape::Single)?.into_single()
    }

    /// Delete an employee by id and return its name.
    ///
    /// The upstream deletes by name, so the record is looked up first. The
    /// delete is only issued once the lookup has succeeded; a failed delete
    /// is reported as-is and nothing is rolled back.
    pub async fn delete_employee_by_id(&self, id: &str) -> FacadeResult<String> {
        let employee = self.employee_by_id(id).await?;
        let name = employee.display_name().map(str::to_owned).ok_or_else(|| {
            FacadeError::ProtocolViolation(format!("employee {id} has no name to delete by"))
        })?;

        tracing::info!(id = %id, name = %name, "Deleting employee");
        let request = DeleteEmployeeRequest { name };
        let response = self.upstream.delete(EMPLOYEE_PATH, &request).await?;
        let deleted = envelope::unwrap(response, Shape::Flag).and_then(Payload::into_flag)?;

        if !deleted {
            tracing::warn!(id = %id, name = %request.name, "Upstream did not delete employee");
            return Err(FacadeError::UpstreamFailure(format!(
                "employee {} was not deleted",
                request.name
            )));
        }

        Ok(request.name)
    }
}

fn employee_path(id: &str) -> String {
    format!("{EMPLOYEE_PATH}/{id}")
}
