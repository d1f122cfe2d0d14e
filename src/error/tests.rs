//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod compare_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = CompareError::from(json_error);

        match error {
            CompareError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = CompareError::from(io_error);

        match error {
            CompareError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_slot_count_message() {
        let error = CompareError::InvalidSlotCount {
            requested: 5,
            current: 4,
            min: 2,
            max: 4,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid slot count 5"));
        assert!(error_string.contains("between 2 and 4"));
        assert!(error_string.contains("currently 4"));
    }

    #[test]
    fn test_duplicate_selection_message() {
        let error = CompareError::DuplicateSelection {
            id: "LeBron James".to_string(),
            slot: 0,
        };

        assert_eq!(
            error.to_string(),
            "Player LeBron James is already selected in slot 0"
        );
    }

    #[test]
    fn test_slot_out_of_range_message() {
        let error = CompareError::SlotOutOfRange {
            index: 3,
            slot_count: 2,
        };
        assert_eq!(error.to_string(), "Slot 3 is out of range (2 slots)");
    }

    #[test]
    fn test_missing_data_source_error() {
        let error = CompareError::MissingDataSource {
            env_var: "NBA_COMPARE_API_URL".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("No record file given"));
        assert!(error_string.contains("NBA_COMPARE_API_URL"));
    }

    #[test]
    fn test_invalid_stat_error() {
        let error = CompareError::InvalidStat {
            stat: "BLOCKS_100".to_string(),
        };
        assert!(error.to_string().contains("BLOCKS_100"));
    }

    #[test]
    fn test_no_data_error() {
        let error = CompareError::NoData;
        assert_eq!(error.to_string(), "Rankings API returned no data");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = CompareError::from(io_error);

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = CompareError::NoData;
        assert_eq!(format!("{:?}", error), "NoData");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(CompareError::NoData)
        }

        match test_function().unwrap_err() {
            CompareError::NoData => (),
            _ => panic!("Expected NoData error"),
        }
    }
}
