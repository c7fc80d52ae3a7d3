//! Pure computations over employee lists.
//!
//! Nothing here performs I/O or mutates its input; the derived queries in
//! `service.rs` call these after the upstream list has been unwrapped.

use crate::employee::model::Employee;
use crate::error::{FacadeError, FacadeResult};

/// Employees whose name contains `needle`, ignoring case.
///
/// Records without a name never match. Input order is preserved, and an
/// empty needle matches every named employee.
pub fn filter_by_name_substring(employees: &[Employee], needle: &str) -> Vec<Employee> {
    let needle = needle.to_lowercase();
    employees
        .iter()
        .filter(|employee| {
            employee
                .display_name()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Highest salary in the list.
///
/// Fails with [`FacadeError::EmptyInput`] when no employee has a salary.
pub fn max_salary(employees: &[Employee]) -> FacadeResult<u64> {
    employees
        .iter()
        .filter_map(|employee| employee.salary)
        .max()
        .ok_or(FacadeError::EmptyInput)
}

/// Names ordered by salary, highest first.
///
/// Employees lacking a salary or a name are dropped. Ties keep input order.
pub fn names_sorted_by_salary_desc(employees: &[Employee]) -> Vec<String> {
    let mut ranked: Vec<(u64, &str)> = employees
        .iter()
        .filter_map(|employee| Some((employee.salary?, employee.display_name()?)))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_, name)| name.to_owned()).collect()
}

/// The `n` best paid names, highest first.
pub fn top_n_names_by_salary(employees: &[Employee], n: usize) -> Vec<String> {
    let mut names = names_sorted_by_salary_desc(employees);
    names.truncate(n);
    names
}
