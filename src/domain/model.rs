use std::fmt;

/// Rendered in place of a name part that was not configured.
pub const MISSING_PART: &str = "None";

pub const NAME_SEPARATOR: &str = "-";

/// `{namespace}-{env_prefix}-{region}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedQueueName(String);

impl ExpectedQueueName {
    pub fn from_parts(
        namespace: Option<&str>,
        env_prefix: Option<&str>,
        region: Option<&str>,
    ) -> Self {
        let parts = [namespace, env_prefix, region].map(|part| part.unwrap_or(MISSING_PART));
        Self(parts.join(NAME_SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpectedQueueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Last path segment of a queue locator.
pub fn short_name(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRecord {
    pub url: String,
    pub name: String,
}

impl QueueRecord {
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let name = short_name(&url).to_string();
        Self { url, name }
    }
}

/// 單次檢查的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Found(QueueRecord),
    Missing { expected: String, scanned: usize },
    Failed { expected: String, reason: String },
}

impl CheckOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, CheckOutcome::Found(_))
    }

    pub fn expected_name(&self) -> &str {
        match self {
            CheckOutcome::Found(record) => &record.name,
            CheckOutcome::Missing { expected, .. } | CheckOutcome::Failed { expected, .. } => {
                expected
            }
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            CheckOutcome::Found(_) => "found",
            CheckOutcome::Missing { .. } => "missing",
            CheckOutcome::Failed { .. } => "failed",
        }
    }

    /// Process exit code. Outside strict mode the check is informational only.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if !strict {
            return 0;
        }
        match self {
            CheckOutcome::Found(_) => 0,
            CheckOutcome::Missing { .. } => 1,
            CheckOutcome::Failed { .. } => 2,
        }
    }
}
