// Common model types

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use yyconfig_client::{Result, TransportError};

/// Result code of the portal envelope; the portal emits both numbers and strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultCode {
    Number(i64),
    Text(String),
}

impl ResultCode {
    pub fn is_success(&self) -> bool {
        match self {
            ResultCode::Number(code) => *code == 0 || *code == 200,
            ResultCode::Text(code) => matches!(code.as_str(), "0" | "0000" | "200"),
        }
    }
}

impl Default for ResultCode {
    fn default() -> Self {
        ResultCode::Number(0)
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultCode::Number(code) => write!(f, "{}", code),
            ResultCode::Text(code) => f.write_str(code),
        }
    }
}

/// Response envelope returned by every portal endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: ResultCode,
    #[serde(default, alias = "message", alias = "desc")]
    pub msg: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a raw payload as returned by the transport
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }

    /// Unwrap `data`, turning a non-success code into [`TransportError::Rejected`]
    pub fn into_result(self) -> Result<Option<T>> {
        if self.code.is_success() {
            Ok(self.data)
        } else {
            Err(TransportError::Rejected {
                code: self.code.to_string(),
                message: self.msg.unwrap_or_default(),
            })
        }
    }

    /// Like [`into_result`](Self::into_result), with absent data defaulted
    pub fn into_data(self) -> Result<T>
    where
        T: Default,
    {
        Ok(self.into_result()?.unwrap_or_default())
    }
}

/// Decode the `data` of an enveloped payload in one step
pub fn decode_data<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    ApiResponse::<T>::from_value(value)?.into_data()
}

/// Spring-style page request
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Spring-style page response
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
    pub size: u64,
}
