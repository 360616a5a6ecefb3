#[test]
fn reply_kinds_pass() {
    let cases = trybuild::TestCases::new();
    cases.pass("tests/pass/*.rs");
}
