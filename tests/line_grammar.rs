//! Line grammar cases
//!
//! Pins down the classification and round-trip behavior of single lines:
//! well-formed calls reserialize byte-identically, everything else passes
//! through as raw text, and parsing is idempotent either way.

use jrn_parser::jrn::ast::Line;
use jrn_parser::jrn::parsing::parse_line;
use rstest::rstest;

fn reparse(line: &Line) -> Line {
    parse_line(&line.literal())
}

#[rstest]
#[case::empty_params("JrnDbg.Foo();")]
#[case::bare_params("JrnWdt.MouseMove(10,20);")]
#[case::spaced_params("JrnCmd.Foo(1, 2, 3);")]
#[case::quoted_cjk("JrnCmd.CompareExpectedResult(\"ExportToGFCCommand\", \"Gfc导出数据对比成功\", \"Text\");")]
#[case::comment_tagged("JrnCmd.Foo(1/*bar*/,2);")]
#[case::timestamp_prefix("/*[2023- 1-15  9: 5:30(123)]*/ JrnWdt.MouseMove(10,20);")]
#[case::trailing_comment("JrnCmd.Foo(1); /* trailing */")]
#[case::paren_in_quotes("JrnCmd.Foo(\"a)b\", c);")]
#[case::quote_only_param("JrnCmd.Foo(\",a\");")]
fn call_roundtrips_byte_identically(#[case] source: &str) {
    let line = parse_line(source);
    assert!(line.is_parameterized(), "expected a call: {}", source);
    assert_eq!(line.literal(), source);
}

#[rstest]
#[case::blank("")]
#[case::whitespace("   ")]
#[case::comment("// this is a note")]
#[case::apostrophe_comment("' 0:< ::0.. Delta VP ->Desktop::0..")]
#[case::short_module("Jrn.Foo(1);")]
#[case::long_module("JrnCommand.Foo(1);")]
#[case::no_parens("JrnCmd.Foo;")]
#[case::digits_in_action("JrnCmd.Foo2(1);")]
fn non_call_passes_through_raw(#[case] source: &str) {
    let line = parse_line(source);
    assert!(line.is_raw(), "expected raw: {}", source);
    assert_eq!(line.literal(), source);
}

#[rstest]
#[case("JrnDbg.Foo();")]
#[case("JrnCmd.Foo(1/*bar*/, \"a,b\");")]
#[case("/*[2023- 1-15  9: 5:30(123)]*/ JrnWdt.MouseMove(10,20);")]
#[case("// this is a note")]
#[case("not a call at all")]
fn parsing_is_idempotent(#[case] source: &str) {
    let line = parse_line(source);
    assert_eq!(reparse(&line), line);
}

#[test]
fn quoted_comma_line_structure() {
    let line = parse_line(
        "JrnCmd.CompareExpectedResult(\"ExportToGFCCommand\", \"Gfc导出数据对比成功\", \"Text\");",
    );
    let call = line.as_parameterized().expect("should be a call");
    assert_eq!(call.module, "JrnCmd");
    assert_eq!(call.action, "CompareExpectedResult");
    assert_eq!(call.suffix, ";");
    let values: Vec<&str> = call.parameters.iter().map(|p| p.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["\"ExportToGFCCommand\"", "\"Gfc导出数据对比成功\"", "\"Text\""]
    );
}

#[test]
fn timestamp_prefix_structure() {
    let line = parse_line("/*[2023- 1-15  9: 5:30(123)]*/ JrnWdt.MouseMove(10,20);");
    let call = line.as_parameterized().expect("should be a call");
    assert_eq!(call.prefix, "[2023- 1-15  9: 5:30(123)]");
    assert_eq!(call.module, "JrnWdt");
    assert_eq!(call.action, "MouseMove");
    let values: Vec<&str> = call.parameters.iter().map(|p| p.value.as_str()).collect();
    assert_eq!(values, vec!["10", "20"]);
}

#[test]
fn comment_tagged_parameter_structure() {
    let line = parse_line("JrnCmd.Foo(1/*bar*/,2);");
    let call = line.as_parameterized().expect("should be a call");
    assert_eq!(call.parameters[0].value, "1");
    assert_eq!(call.parameters[0].comment, "bar");
    assert_eq!(call.parameters[0].literal(), "1/*bar*/");
    assert_eq!(call.parameters[1].value, "2");
}

#[test]
fn empty_parameter_list_has_zero_parameters() {
    let line = parse_line("JrnDbg.Foo();");
    let call = line.as_parameterized().expect("should be a call");
    assert!(call.parameters.is_empty());
}

#[test]
fn comment_line_never_matches_call_pattern() {
    // Textually this would match the call pattern; the comment check wins.
    let line = parse_line("// JrnCmd.Foo(1);");
    assert!(line.is_raw());
    assert_eq!(line.literal(), "// JrnCmd.Foo(1);");
}
