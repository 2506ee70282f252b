//! Page location from real DOCX packages and external commands.

mod common;

use common::{compliant_rpr, para, run, DocxBuilder};
use docverify::{
    load_bytes, BreakSource, Docverify, PageNumber, PaginationOracle, RenderedBreaks, Validator,
};

fn three_pages() -> DocxBuilder {
    DocxBuilder::new()
        .heading_style(1, &compliant_rpr(16))
        .raw(para(Some("Heading1"), &run("Introduction", "")))
        // explicit break at the end of the second paragraph
        .raw(para(
            None,
            r#"<w:r><w:t>First page body</w:t><w:br w:type="page"/></w:r>"#,
        ))
        // saved layout placed this paragraph on a new page
        .raw(para(
            None,
            r#"<w:r><w:lastRenderedPageBreak/><w:t>Second page body</w:t></w:r>"#,
        ))
        .raw(para(
            Some("Heading1"),
            r#"<w:r><w:lastRenderedPageBreak/><w:t>Summary</w:t></w:r>"#,
        ))
}

#[test]
fn test_rendered_breaks_preferred() {
    let doc = load_bytes(&three_pages().build()).unwrap();
    let map = RenderedBreaks::new().resolve(&doc).unwrap();

    let pages: Vec<_> = (0..4).map(|i| map.page_of(i)).collect();
    assert_eq!(
        pages,
        vec![
            PageNumber::Page(1),
            PageNumber::Page(1),
            PageNumber::Page(2),
            PageNumber::Page(3),
        ]
    );
}

#[test]
fn test_explicit_breaks_only() {
    let doc = load_bytes(&three_pages().build()).unwrap();
    let map = RenderedBreaks::new()
        .with_source(BreakSource::Explicit)
        .resolve(&doc)
        .unwrap();

    assert_eq!(map.page_of(1), PageNumber::Page(1));
    assert_eq!(map.page_of(2), PageNumber::Page(2));
    assert_eq!(map.page_of(3), PageNumber::Page(2));
}

#[test]
fn test_page_break_before_property() {
    let data = DocxBuilder::new()
        .text("Cover")
        .raw(para(
            None,
            r#"<w:pPr><w:pageBreakBefore/></w:pPr><w:r><w:t>Contents</w:t></w:r>"#,
        ))
        .build();
    let doc = load_bytes(&data).unwrap();
    let map = RenderedBreaks::new().resolve(&doc).unwrap();
    assert_eq!(map.page_of(0), PageNumber::Page(1));
    assert_eq!(map.page_of(1), PageNumber::Page(2));
}

#[test]
fn test_records_carry_pages() {
    let doc = load_bytes(&three_pages().build()).unwrap();
    let report = Validator::new()
        .validate_with(&doc, &RenderedBreaks::new(), None)
        .unwrap();

    assert_eq!(report.len(), 8);
    assert!(report.for_paragraph(0).all(|r| r.page == PageNumber::Page(1)));
    assert!(report.for_paragraph(3).all(|r| r.page == PageNumber::Page(3)));
}

#[cfg(unix)]
mod command {
    use super::*;
    use docverify::{CommandPagination, Error};
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn shell(script: &str) -> CommandPagination {
        // the document path arrives as $1
        CommandPagination::new("sh").args(["-c", script, "paginate"])
    }

    fn fixture(dir: &TempDir) -> std::path::PathBuf {
        three_pages().write_to(dir.path(), "paged.docx")
    }

    #[test]
    fn test_command_object_output() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir);

        let result = Docverify::new()
            .with_pagination(shell(r#"test -f "$1" && echo '{"0": 4, "3": 7}'"#))
            .check(&path)
            .unwrap();

        assert!(result.report.for_paragraph(0).all(|r| r.page == PageNumber::Page(4)));
        assert!(result.report.for_paragraph(3).all(|r| r.page == PageNumber::Page(7)));
    }

    #[test]
    fn test_command_array_with_gaps() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir);
        let doc = docverify::load_file(&path).unwrap();

        let map = shell("echo '[1, null, 2]'").resolve(&doc).unwrap();
        assert_eq!(map.page_of(0), PageNumber::Page(1));
        assert_eq!(map.page_of(1), PageNumber::Unknown);
        assert_eq!(map.page_of(2), PageNumber::Page(2));
        assert_eq!(map.page_of(3), PageNumber::Unknown);
    }

    #[test]
    fn test_command_timeout() {
        let dir = TempDir::new().unwrap();
        let path = fixture(&dir);
        let doc = docverify::load_file(&path).unwrap();

        let oracle = shell("exec sleep 10").with_timeout(Duration::from_millis(200));
        let started = Instant::now();
        let err = oracle.resolve(&doc).unwrap_err();

        assert!(matches!(err, Error::PaginationTimeout(_)));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_command_timeout_after_closing_output() {
        let dir = TempDir::new().unwrap();
        let doc = docverify::load_file(fixture(&dir)).unwrap();

        let oracle = shell("exec 1>&-; exec sleep 10").with_timeout(Duration::from_millis(300));
        let started = Instant::now();
        let err = oracle.resolve(&doc).unwrap_err();

        assert!(matches!(err, Error::PaginationTimeout(_)));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_command_not_found() {
        let dir = TempDir::new().unwrap();
        let doc = docverify::load_file(fixture(&dir)).unwrap();

        let err = CommandPagination::new("docverify-no-such-paginator")
            .resolve(&doc)
            .unwrap_err();
        assert!(matches!(err, Error::PaginationMisconfigured(_)));
        assert!(err.is_oracle_error());
    }

    #[test]
    fn test_command_nonzero_exit() {
        let dir = TempDir::new().unwrap();
        let doc = docverify::load_file(fixture(&dir)).unwrap();

        let err = shell("echo 'layout engine crashed' >&2; exit 3")
            .resolve(&doc)
            .unwrap_err();
        match err {
            Error::PaginationFailed(message) => assert!(message.contains("layout engine crashed")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_command_bad_output() {
        let dir = TempDir::new().unwrap();
        let doc = docverify::load_file(fixture(&dir)).unwrap();

        let err = shell("echo 'page one'").resolve(&doc).unwrap_err();
        assert!(matches!(err, Error::PaginationFailed(_)));

        let err = shell(r#"echo '{"0": 0}'"#).resolve(&doc).unwrap_err();
        assert!(matches!(err, Error::PaginationFailed(_)));
    }

    #[test]
    fn test_command_requires_path() {
        let doc = load_bytes(&three_pages().build()).unwrap();
        let err = shell("echo '[]'").resolve(&doc).unwrap_err();
        assert!(matches!(err, Error::PaginationMisconfigured(_)));
    }
}
