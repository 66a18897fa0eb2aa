//! HR module registry
//!
//! The six admin screens share one CRUD contract; only the resource segment
//! of the URL differs.

use std::fmt;

use crate::model::RecordId;

/// One of the HR administration modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HrModule {
    /// Employee awards.
    Awards,
    /// Employee complaints.
    Complaints,
    /// Resignation requests.
    Resignations,
    /// Department transfers.
    Transfers,
    /// Travel requests.
    Travel,
    /// Disciplinary warnings.
    Warnings,
}

impl HrModule {
    /// All modules, in sidebar order.
    pub const ALL: [HrModule; 6] = [
        HrModule::Awards,
        HrModule::Complaints,
        HrModule::Resignations,
        HrModule::Transfers,
        HrModule::Travel,
        HrModule::Warnings,
    ];

    /// Returns the URL resource segment for this module.
    pub fn resource(&self) -> &'static str {
        match self {
            HrModule::Awards => "awards",
            HrModule::Complaints => "complaints",
            HrModule::Resignations => "resignations",
            HrModule::Transfers => "transfers",
            HrModule::Travel => "travel",
            HrModule::Warnings => "warnings",
        }
    }

    /// Returns the human-readable module name.
    pub fn label(&self) -> &'static str {
        match self {
            HrModule::Awards => "Awards",
            HrModule::Complaints => "Complaints",
            HrModule::Resignations => "Resignations",
            HrModule::Transfers => "Transfers",
            HrModule::Travel => "Travel Requests",
            HrModule::Warnings => "Warnings",
        }
    }

    /// Returns the collection path, e.g. `/api/admin/hr/awards`.
    pub(crate) fn collection_path(&self) -> String {
        format!("/api/admin/hr/{}", self.resource())
    }

    /// Returns the path for a single record, e.g. `/api/admin/hr/awards/7`.
    pub(crate) fn record_path(&self, id: &RecordId) -> String {
        format!(
            "{}/{}",
            self.collection_path(),
            urlencoding::encode(&id.canonical())
        )
    }
}

impl fmt::Display for HrModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        assert_eq!(HrModule::Awards.collection_path(), "/api/admin/hr/awards");
        assert_eq!(HrModule::Travel.collection_path(), "/api/admin/hr/travel");
    }

    #[test]
    fn test_record_path_encodes_id() {
        let id = RecordId::from("WRN 2025/01");
        assert_eq!(
            HrModule::Warnings.record_path(&id),
            "/api/admin/hr/warnings/WRN%202025%2F01"
        );
    }
}
