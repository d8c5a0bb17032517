#[test]
fn keyword_lines_get_semicolons() {
    assert_eq!(crate::repair_to_string("const a = 1"), "const a = 1;");
    assert_eq!(crate::repair_to_string("let b = 2"), "let b = 2;");
    assert_eq!(crate::repair_to_string("var c = 3"), "var c = 3;");
    assert_eq!(crate::repair_to_string("return x"), "return x;");
    assert_eq!(crate::repair_to_string("export default foo"), "export default foo;");
}

#[test]
fn assignment_and_call_lines_get_semicolons() {
    assert_eq!(crate::repair_to_string("total += n"), "total += n;");
    assert_eq!(crate::repair_to_string("doWork()"), "doWork();");
}

#[test]
fn plain_expression_line_is_left_alone() {
    let out = crate::repair("doStuff");
    assert_eq!(out.code, "doStuff");
    assert_eq!(out.changes, vec![crate::NO_CHANGES.to_string()]);
}

#[test]
fn terminated_lines_are_not_doubled() {
    assert_eq!(crate::repair_to_string("const a = 1;"), "const a = 1;");
    assert_eq!(crate::repair_to_string("items[0] = 4,"), "items[0] = 4,");
    assert_eq!(crate::repair_to_string("const xs = ["), "const xs = [");
}

#[test]
fn line_comments_get_no_semicolon() {
    let out = crate::repair("// const a = 1");
    assert_eq!(out.code, "// const a = 1");
    assert_eq!(out.changes, vec![crate::NO_CHANGES.to_string()]);
}

#[test]
fn missing_close_paren_is_appended_before_the_semicolon() {
    let out = crate::repair("foo(bar");
    assert_eq!(out.code, "foo(bar);");
    assert_eq!(
        out.changes,
        vec![
            "Line 1: Added missing ')'".to_string(),
            "Line 1: Added missing semicolon".to_string(),
        ],
    );
}

#[test]
fn only_one_paren_is_appended_per_line() {
    // two opens, none closed: the repair closes a single level
    let out = crate::repair_to_string("f(g(x");
    assert_eq!(out, "f(g(x);");
}

#[test]
fn block_openers_never_get_a_paren() {
    let out = crate::repair("if (x {");
    assert_eq!(out.code, "if (x {\n}");
    assert!(out.changes.iter().all(|c| !c.contains("')'")));
}

#[test]
fn stray_close_paren_still_reads_as_call_end() {
    assert_eq!(crate::repair_to_string(")"), ");");
}
