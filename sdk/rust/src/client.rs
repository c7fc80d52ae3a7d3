use std::fmt;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: Option<String>,
    pub salary: Option<u64>,
    pub age: Option<u32>,
    pub title: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub salary: u64,
    pub age: u32,
    pub title: String,
    pub email: String,
}

/// Errors returned by [`FacadeClient`].
#[derive(Debug)]
pub enum SdkError {
    /// The request never completed.
    Http(reqwest::Error),
    /// The facade answered with a non-200 status.
    Status { status: StatusCode, body: String },
}

impl SdkError {
    /// HTTP status of a [`SdkError::Status`] error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SdkError::Status { status, .. } => Some(*status),
            SdkError::Http(e) => e.status(),
        }
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::Http(e) => write!(f, "request failed: {}", e),
            SdkError::Status { status, body } => {
                write!(f, "facade returned error status {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for SdkError {}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Http(e)
    }
}

pub struct FacadeClient {
    client: Client,
    base_url: String,
}

impl FacadeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, SdkError> {
        let resp = self.client.get(self.url("/employee")).send().await?;
        json_body(resp).await
    }

    pub async fn search_employees(&self, search: &str) -> Result<Vec<Employee>, SdkError> {
        let resp = self
            .client
            .get(self.url(&format!("/employee/search/{}", search)))
            .send()
            .await?;
        json_body(resp).await
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, SdkError> {
        let resp = self
            .client
            .get(self.url(&format!("/employee/{}", id)))
            .send()
            .await?;
        json_body(resp).await
    }

    pub async fn highest_salary(&self) -> Result<u64, SdkError> {
        let resp = self.client.get(self.url("/employee/highestSalary")).send().await?;
        json_body(resp).await
    }

    pub async fn top_ten_highest_earning_names(&self) -> Result<Vec<String>, SdkError> {
        let resp = self
            .client
            .get(self.url("/employee/topTenHighestEarningEmployeeNames"))
            .send()
            .await?;
        json_body(resp).await
    }

    pub async fn create_employee(&self, req: &CreateEmployee) -> Result<Employee, SdkError> {
        let resp = self
            .client
            .post(self.url("/employee"))
            .json(req)
            .send()
            .await?;
        json_body(resp).await
    }

    /// Delete by id; returns the deleted employee's name.
    pub async fn delete_employee(&self, id: &str) -> Result<String, SdkError> {
        let resp = self
            .client
            .delete(self.url(&format!("/employee/{}", id)))
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.text().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn check_status(resp: Response) -> Result<Response, SdkError> {
    let status = resp.status();
    if status != StatusCode::OK {
        let body = resp.text().await.unwrap_or_default();
        return Err(SdkError::Status { status, body });
    }
    Ok(resp)
}

async fn json_body<T: DeserializeOwned>(resp: Response) -> Result<T, SdkError> {
    let resp = check_status(resp).await?;
    Ok(resp.json::<T>().await?)
}
