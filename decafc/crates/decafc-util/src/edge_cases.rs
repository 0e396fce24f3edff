//! Edge case tests for decafc-util

#[cfg(test)]
mod tests {
    use crate::{DiagnosticBuilder, FxHashSet, SourceInfo};

    #[test]
    fn test_edge_line_zero_renders() {
        assert_eq!(SourceInfo::new("x", 0).to_string(), "[x:0]");
    }

    #[test]
    fn test_edge_empty_file_name() {
        let info = SourceInfo::new("", 1);
        assert_eq!(info.to_string(), "[:1]");
        assert!(!info.is_anonymous());
    }

    #[test]
    fn test_edge_file_name_with_colon() {
        let info = SourceInfo::new("C:\\src\\main.decaf", 12);
        assert_eq!(info.to_string(), "[C:\\src\\main.decaf:12]");
    }

    #[test]
    fn test_edge_max_line() {
        let info = SourceInfo::anonymous(u32::MAX);
        assert_eq!(info.line(), u32::MAX);
    }

    #[test]
    fn test_edge_source_info_hashable() {
        let mut set = FxHashSet::default();
        set.insert(SourceInfo::new("a", 1));
        set.insert(SourceInfo::new("a", 1));
        set.insert(SourceInfo::new("a", 2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_edge_empty_message() {
        let diag = DiagnosticBuilder::error("").build();
        assert_eq!(diag.to_string(), "error: ");
    }
}
