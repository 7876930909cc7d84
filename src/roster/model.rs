use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar format used for hire dates, both on disk and in user input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The current local date, used whenever a hire date is not supplied.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `YYYY-MM-DD` date, zero-padded. Unpadded forms such as `2023-1-5`
/// are rejected so a stored value always writes back byte for byte.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == raw).then_some(date)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    OnLeave,
    Terminated,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Active,
        Status::Inactive,
        Status::OnLeave,
        Status::Terminated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::OnLeave => "On Leave",
            Status::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    /// Accepts the canonical labels case-insensitively, plus `on-leave` / `on_leave`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().to_lowercase() == normalized)
            .ok_or_else(|| format!("Invalid status: {}", s.trim()))
    }
}

/// One managed personnel entry.
///
/// Serializes to a flat JSON object with exactly eight string-valued keys, in
/// declaration order. Missing `email`/`phone` read back as empty, a missing or
/// empty `hire_date` reads back as today, and a missing `status` as `Active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "today", with = "hire_date_format")]
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub status: Status,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            department: department.into(),
            email: String::new(),
            phone: String::new(),
            hire_date: today(),
            status: Status::default(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_hire_date(mut self, hire_date: NaiveDate) -> Self {
        self.hire_date = hire_date;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// True if the lowercased `term` occurs in the id, name, role or department.
    pub fn matches(&self, term_lower: &str) -> bool {
        [&self.id, &self.name, &self.role, &self.department]
            .iter()
            .any(|field| field.to_lowercase().contains(term_lower))
    }
}

mod hire_date_format {
    use super::{parse_date, today, DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(today());
        }
        parse_date(raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid hire_date {:?}, expected YYYY-MM-DD", raw))
        })
    }
}

/// The eight record columns, in their fixed display and export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    Name,
    Role,
    Department,
    Email,
    Phone,
    HireDate,
    Status,
}

impl RecordField {
    pub const ALL: [RecordField; 8] = [
        RecordField::Id,
        RecordField::Name,
        RecordField::Role,
        RecordField::Department,
        RecordField::Email,
        RecordField::Phone,
        RecordField::HireDate,
        RecordField::Status,
    ];

    /// Column title, as used in table headers and the CSV header row.
    pub fn title(&self) -> &'static str {
        match self {
            RecordField::Id => "ID",
            RecordField::Name => "Name",
            RecordField::Role => "Role",
            RecordField::Department => "Department",
            RecordField::Email => "Email",
            RecordField::Phone => "Phone",
            RecordField::HireDate => "Hire Date",
            RecordField::Status => "Status",
        }
    }

    /// Key of the field in the persisted JSON object.
    pub fn key(&self) -> &'static str {
        match self {
            RecordField::Id => "id",
            RecordField::Name => "name",
            RecordField::Role => "role",
            RecordField::Department => "department",
            RecordField::Email => "email",
            RecordField::Phone => "phone",
            RecordField::HireDate => "hire_date",
            RecordField::Status => "status",
        }
    }

    pub fn value(&self, record: &Record) -> String {
        match self {
            RecordField::Id => record.id.clone(),
            RecordField::Name => record.name.clone(),
            RecordField::Role => record.role.clone(),
            RecordField::Department => record.department.clone(),
            RecordField::Email => record.email.clone(),
            RecordField::Phone => record.phone.clone(),
            RecordField::HireDate => record.hire_date.format(DATE_FORMAT).to_string(),
            RecordField::Status => record.status.to_string(),
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for RecordField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        RecordField::ALL
            .into_iter()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| format!("Unknown field: {}", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new("AB1234", "Jane Doe", "Engineer", "R&D")
            .with_email("jane@example.com")
            .with_phone("+15551234567")
            .with_hire_date(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())
    }

    #[test]
    fn new_record_defaults_status_and_hire_date() {
        let record = Record::new("AB1234", "Jane Doe", "Engineer", "R&D");
        assert_eq!(record.status, Status::Active);
        assert_eq!(record.hire_date, today());
        assert!(record.email.is_empty());
        assert!(record.phone.is_empty());
    }

    #[test]
    fn serializes_exactly_eight_string_keys_in_order() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        let expected: Vec<&str> = RecordField::ALL.iter().map(|f| f.key()).collect();

        let mut sorted_keys = keys.clone();
        sorted_keys.sort();
        let mut sorted_expected = expected.clone();
        sorted_expected.sort();
        assert_eq!(sorted_keys, sorted_expected);
        assert!(obj.values().all(|v| v.is_string()));
        assert_eq!(obj["hire_date"], "2023-01-15");
        assert_eq!(obj["status"], "Active");
    }

    #[test]
    fn on_leave_uses_spaced_label() {
        let record = sample().with_status(Status::OnLeave);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"status\":\"On Leave\""));

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, Status::OnLeave);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{"id":"AB1234","name":"Jane","role":"Eng","department":"R&D"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.email, "");
        assert_eq!(record.phone, "");
        assert_eq!(record.hire_date, today());
        assert_eq!(record.status, Status::Active);
    }

    #[test]
    fn empty_hire_date_reads_as_today() {
        let json = r#"{"id":"AB1234","name":"Jane","role":"Eng","department":"R&D",
            "email":"","phone":"","hire_date":"","status":"Inactive"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.hire_date, today());
        assert_eq!(record.status, Status::Inactive);
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        let json = r#"{"id":"AB1234","name":"Jane","role":"Eng","department":"R&D",
            "status":"Retired"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn invalid_hire_date_fails_to_parse() {
        let json = r#"{"id":"AB1234","name":"Jane","role":"Eng","department":"R&D",
            "hire_date":"2023-02-30"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn unpadded_hire_date_is_rejected() {
        let json = r#"{"id":"AB1234","name":"Jane","role":"Eng","department":"R&D",
            "hire_date":"2023-1-5"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());

        assert_eq!(parse_date("2023-1-5"), None);
        assert_eq!(parse_date(" 2023-01-05"), None);
        assert_eq!(
            parse_date("2023-01-05"),
            Some(NaiveDate::from_ymd_opt(2023, 1, 5).unwrap())
        );
    }

    #[test]
    fn stored_record_writes_back_unchanged() {
        let json = r#"{"id":"AB1234","name":"Jane","role":"Eng","department":"R&D","email":"","phone":"","hire_date":"2023-01-05","status":"On Leave"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }

    #[test]
    fn status_parses_loosely() {
        assert_eq!("active".parse::<Status>().unwrap(), Status::Active);
        assert_eq!("On Leave".parse::<Status>().unwrap(), Status::OnLeave);
        assert_eq!("on-leave".parse::<Status>().unwrap(), Status::OnLeave);
        assert_eq!("TERMINATED".parse::<Status>().unwrap(), Status::Terminated);
        assert!("retired".parse::<Status>().is_err());
    }

    #[test]
    fn matches_is_limited_to_four_fields() {
        let record = sample();
        assert!(record.matches("ab12"));
        assert!(record.matches("jane"));
        assert!(record.matches("engin"));
        assert!(record.matches("r&d"));
        assert!(!record.matches("example.com"));
        assert!(!record.matches("555"));
    }

    #[test]
    fn record_field_parsing_and_values() {
        assert_eq!("hire-date".parse::<RecordField>().unwrap(), RecordField::HireDate);
        assert_eq!("Hire Date".parse::<RecordField>().unwrap(), RecordField::HireDate);
        assert_eq!("ID".parse::<RecordField>().unwrap(), RecordField::Id);
        assert!("salary".parse::<RecordField>().is_err());

        let record = sample();
        assert_eq!(RecordField::HireDate.value(&record), "2023-01-15");
        assert_eq!(RecordField::Status.value(&record), "Active");
        assert_eq!(RecordField::HireDate.title(), "Hire Date");
    }
}
