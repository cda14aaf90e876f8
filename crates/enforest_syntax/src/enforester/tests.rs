#[cfg(test)]
/// Enforester unit tests.
///
/// Happy paths are checked through the S-expression rendering; failures through their
/// classification and message, since the enforester never returns a partial result.
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;
    use crate::operators::{Associativity, OperatorTable};
    use crate::{lexer, reader};

    fn terms_of(source: &str) -> Vec<Term> {
        let tokens = lexer::lex(source).expect("source should lex");
        reader::read(tokens).expect("source should read")
    }

    fn parse_with(source: &str, config: &EnforestConfig) -> Result<Program, SyntaxError> {
        enforest(terms_of(source), config)
    }

    fn parse(source: &str) -> Result<Program, SyntaxError> {
        parse_with(source, &EnforestConfig::default())
    }

    fn sexp(source: &str) -> String {
        match parse(source) {
            Ok(program) => program.to_string(),
            Err(err) => panic!("`{}` should enforest, got: {}", source, err),
        }
    }

    fn parse_err(source: &str) -> SyntaxError {
        parse(source).expect_err("source should be rejected")
    }

    // ------------------------------------------------------------------------
    // Expression reduction
    // ------------------------------------------------------------------------

    #[test]
    fn test_multiplication_binds_tighter() {
        insta::assert_snapshot!(sexp("1 + 2 * 3;"), @"(expr (+ 1 (* 2 3)))");
        insta::assert_snapshot!(sexp("1 * 2 + 3;"), @"(expr (+ (* 1 2) 3))");
    }

    #[test]
    fn test_left_associativity() {
        insta::assert_snapshot!(sexp("1 - 2 - 3;"), @"(expr (- (- 1 2) 3))");
        insta::assert_snapshot!(sexp("a / b * c % d;"), @"(expr (% (* (/ a b) c) d))");
    }

    #[test]
    fn test_grouping_leaves_no_node() {
        insta::assert_snapshot!(sexp("(1 + 2) * 3;"), @"(expr (* (+ 1 2) 3))");
        insta::assert_snapshot!(sexp("((x));"), @"(expr x)");
    }

    #[test]
    fn test_unary_binds_tighter_than_binary() {
        insta::assert_snapshot!(sexp("-1 + 2;"), @"(expr (+ (- 1) 2))");
        insta::assert_snapshot!(sexp("a + -b * c;"), @"(expr (+ a (* (- b) c)))");
        insta::assert_snapshot!(sexp("!!a;"), @"(expr (! (! a)))");
    }

    #[test]
    fn test_word_operators() {
        insta::assert_snapshot!(sexp("typeof x === \"s\";"), @r#"(expr (=== (typeof x) "s"))"#);
        insta::assert_snapshot!(sexp("a in b && c instanceof d;"), @"(expr (&& (in a b) (instanceof c d)))");
    }

    #[test]
    fn test_logical_precedence_ladder() {
        insta::assert_snapshot!(
            sexp("a || b && c | d ^ e & f == g < h << i;"),
            @"(expr (|| a (&& b (| c (^ d (& e (== f (< g (<< h i)))))))))"
        );
    }

    #[test]
    fn test_literals() {
        insta::assert_snapshot!(sexp("true; false; null; 'hi'; 0x10;"), @r#"
        (expr true)
        (expr false)
        (expr null)
        (expr "hi")
        (expr 16)
        "#);
    }

    #[test]
    fn test_assignment_is_right_associative() {
        insta::assert_snapshot!(sexp("a = b = 1;"), @"(expr (= a (= b 1)))");
        insta::assert_snapshot!(sexp("x += 1 * 2;"), @"(expr (+= x (* 1 2)))");
    }

    #[test]
    fn test_sequence_folds_left() {
        insta::assert_snapshot!(sexp("a, b = 1, c;"), @"(expr (, (, a (= b 1)) c))");
    }

    #[test]
    fn test_custom_right_associative_operator() {
        let operators = OperatorTable::standard().with_infix(OperatorId::Star, 13, Associativity::Right);
        let config = EnforestConfig::default().with_operators(operators);
        let program = parse_with("1 * 2 * 3;", &config).unwrap();
        insta::assert_snapshot!(program.to_string(), @"(expr (* 1 (* 2 3)))");
    }

    #[test]
    fn test_table_without_operator_stops_reduction() {
        let config = EnforestConfig::default().with_operators(OperatorTable::standard().without_infix(OperatorId::Amp));
        let (expr, remaining) = enforest_expression(terms_of("a & b"), &config).unwrap();
        assert_eq!(expr.node.to_string(), "a");
        assert_eq!(remaining.len(), 2, "`& b` should be left in the stream");
    }

    // ------------------------------------------------------------------------
    // Templates
    // ------------------------------------------------------------------------

    #[test]
    fn test_template_with_interpolation() {
        insta::assert_snapshot!(sexp("`a${x + 1}b`;"), @r#"(expr (template "a" (+ x 1) "b"))"#);
    }

    #[test]
    fn test_template_keeps_empty_fragments() {
        insta::assert_snapshot!(sexp("`${x}`;"), @r#"(expr (template "" x ""))"#);
        insta::assert_snapshot!(sexp("`plain`;"), @r#"(expr (template "plain"))"#);
    }

    #[test]
    fn test_template_interpolation_must_be_one_expression() {
        let err = parse_err("`${1 2}`;");
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(
            err.to_string(),
            "expected `}` to close the interpolation, found number `2`"
        );
    }

    // ------------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------------

    #[test]
    fn test_while_statement() {
        insta::assert_snapshot!(sexp("while (1) ;"), @"(while 1 (empty))");
    }

    #[test]
    fn test_if_else_statement() {
        insta::assert_snapshot!(sexp("if (1) ; else ;"), @"(if 1 (empty) (empty))");
        insta::assert_snapshot!(
            sexp("if (a) x; else if (b) y; else z;"),
            @"(if a (expr x) (if b (expr y) (expr z)))"
        );
    }

    #[test]
    fn test_for_statement_shapes() {
        insta::assert_snapshot!(sexp("for (;;) ;"), @"(for _ _ _ (empty))");
        insta::assert_snapshot!(
            sexp("for (var i = 0; i < 10; i = i + 1) x;"),
            @"(for (var (i 0)) (< i 10) (= i (+ i 1)) (expr x))"
        );
        insta::assert_snapshot!(sexp("for (i = 0; ; ) {}"), @"(for (= i 0) _ _ (block))");
        insta::assert_snapshot!(sexp("for (; i; ) {}"), @"(for _ i _ (block))");
    }

    #[test]
    fn test_empty_statement_and_block() {
        insta::assert_snapshot!(sexp(";"), @"(empty)");
        insta::assert_snapshot!(sexp("{}"), @"(block)");
        insta::assert_snapshot!(sexp("{ { ; } }"), @"(block (block (empty)))");
    }

    #[test]
    fn test_variable_declaration() {
        insta::assert_snapshot!(sexp("var x = 1, y;"), @"(var (x 1) (y))");
        insta::assert_snapshot!(sexp("let a = b = 2"), @"(let (a (= b 2)))");
        insta::assert_snapshot!(sexp("const c = 1"), @"(const (c 1))");
    }

    #[test]
    fn test_keyword_as_binding_identifier() {
        insta::assert_snapshot!(sexp("var let = 1;"), @"(var (let 1))");
        insta::assert_snapshot!(sexp("function delete(new) {}"), @"(function delete (new) (block))");
    }

    #[test]
    fn test_variable_declaration_fields() {
        let program = parse("var x = 1, y;").unwrap();
        let Statement::VariableDeclaration(decl) = &program.statements[0].node else {
            panic!("expected a variable declaration");
        };
        assert_eq!(decl.kind, VariableKind::Var);
        assert_eq!(decl.declarators.len(), 2);
        assert!(decl.declarators[0].node.init.is_some());
        assert!(decl.declarators[1].node.init.is_none());
    }

    #[test]
    fn test_function_declaration() {
        insta::assert_snapshot!(
            sexp("function f(a, b = 2, ...rest) { a + b; }"),
            @"(function f (a (= b 2) ...rest) (block (expr (+ a b))))"
        );
        insta::assert_snapshot!(sexp("function g() {}"), @"(function g () (block))");
        insta::assert_snapshot!(sexp("function h(a,) {}"), @"(function h (a) (block))");
    }

    #[test]
    fn test_expression_statements_without_semicolons() {
        insta::assert_snapshot!(sexp("a b"), @r"
        (expr a)
        (expr b)
        ");
    }

    #[test]
    fn test_statement_spans() {
        let program = parse("var x = 1;").unwrap();
        assert_eq!(program.statements[0].span, Span::new(0, 10));
        let program = parse("  a + b").unwrap();
        assert_eq!(program.statements[0].span, Span::new(2, 7));
    }

    // ------------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------------

    #[test]
    fn test_enforest_statement_returns_remaining_terms() {
        let (statement, remaining) = enforest_statement(terms_of("a; b;"), &EnforestConfig::default()).unwrap();
        assert_eq!(statement.node.to_string(), "(expr a)");
        assert_eq!(remaining.len(), 2);
    }

    #[test]
    fn test_enforest_expression_stops_at_semicolon() {
        let (expr, remaining) = enforest_expression(terms_of("1 + 2; x"), &EnforestConfig::default()).unwrap();
        assert_eq!(expr.node.to_string(), "(+ 1 2)");
        assert!(term::is_punctuation(remaining.first(), PunctuationId::Semicolon));
        assert!(term::is_identifier_named(remaining.get(1), "x"));
    }

    #[test]
    fn test_enforest_expression_on_empty_sequence() {
        let err = enforest_expression(Vec::new(), &EnforestConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "expected expression, found end of input");
    }

    #[test]
    fn test_enforester_is_reusable() {
        let config = EnforestConfig::default();
        let enforester = Enforester::new(&config);
        let first = enforester.enforest_program(terms_of("1 + 2;")).unwrap();
        let second = enforester.enforest_program(terms_of("3 * 4;")).unwrap();
        assert_eq!(first.to_string(), "(expr (+ 1 2))");
        assert_eq!(second.to_string(), "(expr (* 3 4))");
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(parse("").unwrap().statements.len(), 0);
        assert_eq!(parse("// nothing\n").unwrap().statements.len(), 0);
    }

    #[test]
    fn test_term_stream_reports_end_position() {
        let mut stream = TermStream::new(terms_of("a b"));
        assert_eq!(stream.here(), Span::new(0, 1));
        stream.advance();
        stream.advance();
        assert!(stream.is_empty());
        assert_eq!(stream.here(), Span::new(3, 3));
        assert_eq!(stream.depth(), 0);
    }

    // ------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------

    #[test]
    fn test_dangling_binary_operator() {
        let err = parse_err("1 +;");
        assert_eq!(err.kind(), ErrorKind::Expression);
        assert_eq!(err.to_string(), "operator `+` is missing its right operand, found `;`");
        assert_eq!(err.span(), Span::new(2, 3));
    }

    #[test]
    fn test_dangling_prefix_operator() {
        let err = parse_err("-;");
        assert_eq!(err.kind(), ErrorKind::Expression);
        assert_eq!(err.to_string(), "operator `-` is missing its operand, found `;`");
    }

    #[test]
    fn test_missing_left_operand() {
        let err = parse_err("* 2;");
        assert_eq!(err.kind(), ErrorKind::Expression);
        assert_eq!(err.to_string(), "operator `*` is missing its left operand");
    }

    #[test]
    fn test_missing_assignment_value() {
        let err = parse_err("x = ;");
        assert_eq!(err.kind(), ErrorKind::Expression);
        assert_eq!(err.to_string(), "operator `=` is missing its right operand, found `;`");
        assert_eq!(err.span(), Span::new(2, 3));
    }

    #[test]
    fn test_invalid_assignment_target() {
        let err = parse_err("1 = 2;");
        assert_eq!(err.kind(), ErrorKind::Expression);
        assert_eq!(err.to_string(), "invalid assignment target for `=`");

        let err = parse_err("a + b = c;");
        assert_eq!(err.kind(), ErrorKind::Expression);
    }

    #[test]
    fn test_missing_expression_after_comma() {
        let err = parse_err("a, ;");
        assert_eq!(err.to_string(), "operator `,` is missing its right operand, found `;`");
    }

    #[test]
    fn test_while_requires_paren_group() {
        let err = parse_err("while 1 ;");
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(err.to_string(), "expected `(...)` group after `while`, found number `1`");
    }

    #[test]
    fn test_paren_group_must_be_consumed() {
        let err = parse_err("(1 2);");
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(err.to_string(), "expected `)`, found number `2`");
    }

    #[test]
    fn test_if_else_without_alternate() {
        let err = parse_err("if (a) ; else");
        assert_eq!(err.to_string(), "expected statement, found end of input");
    }

    #[test]
    fn test_binding_must_be_identifier() {
        let err = parse_err("var 1 = 2;");
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(err.to_string(), "expected binding identifier, found number `1`");

        let err = parse_err("function (a) {}");
        assert_eq!(err.kind(), ErrorKind::Structural);
    }

    #[test]
    fn test_rest_parameter_must_be_last() {
        let err = parse_err("function f(...a, b) {}");
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(err.to_string(), "expected `)` after the rest parameter, found `,`");
    }

    #[test]
    fn test_parameters_need_commas() {
        let err = parse_err("function f(a b) {}");
        assert_eq!(err.to_string(), "expected `,` between parameters, found identifier `b`");
    }

    #[test]
    fn test_function_requires_brace_body() {
        let err = parse_err("function f() x;");
        assert_eq!(err.kind(), ErrorKind::Structural);
    }

    #[test]
    fn test_for_in_and_for_of_are_not_implemented() {
        for source in ["for (var x in o) ;", "for (x in o) ;", "for (x of o) ;", "for (let x of o) ;"] {
            let err = parse_err(source);
            assert_eq!(err.kind(), ErrorKind::NotImplemented, "{}", source);
            assert_eq!(err.to_string(), "for-in/for-of loop is not implemented");
        }
    }

    #[test]
    fn test_destructuring_is_not_implemented() {
        for source in ["var [a] = b;", "let {a} = b;", "function f([a]) {}"] {
            let err = parse_err(source);
            assert_eq!(err.kind(), ErrorKind::NotImplemented, "{}", source);
            assert_eq!(err.to_string(), "destructuring binding pattern is not implemented");
        }
    }

    #[test]
    fn test_unsupported_operands_are_not_implemented() {
        assert_eq!(parse_err("[1];").to_string(), "array literal is not implemented");
        assert_eq!(parse_err("x = {};").to_string(), "object literal is not implemented");
        assert_eq!(parse_err("#`a`;").to_string(), "syntax quotation is not implemented");
        assert_eq!(parse_err("new Foo;").to_string(), "`new` expression is not implemented");
        assert_eq!(parse_err("this;").to_string(), "`this` expression is not implemented");
    }

    #[test]
    fn test_reserved_statements_are_not_implemented() {
        for (source, expected) in [
            ("return 1;", "`return` statement is not implemented"),
            ("do ; while (1)", "`do` statement is not implemented"),
            ("break;", "`break` statement is not implemented"),
            ("continue;", "`continue` statement is not implemented"),
        ] {
            let err = parse_err(source);
            assert_eq!(err.kind(), ErrorKind::NotImplemented);
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_nesting_limit_for_groups() {
        let config = EnforestConfig::default().with_max_depth(2);
        assert!(parse_with("((1));", &config).is_ok());

        let err = parse_with("(((1)));", &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(err.to_string(), "expected at most 2 levels of nesting, found `(...)` group");
    }

    #[test]
    fn test_nesting_limit_for_statement_bodies() {
        let config = EnforestConfig::default().with_max_depth(2);
        let err = parse_with("if (a) if (b) if (c) ;", &config).unwrap_err();
        assert!(
            err.to_string().contains("at most 2 levels of nesting"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_nesting_limit_for_prefix_chains() {
        let config = EnforestConfig::default().with_max_depth(3);
        insta::assert_snapshot!(parse_with("!!!x;", &config).unwrap().to_string(), @"(expr (! (! (! x))))");

        let err = parse_with("!!!!x;", &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(err.to_string(), "expected at most 3 levels of nesting, found operator `!`");
        assert_eq!(err.span(), Span::new(0, 1));
    }

    #[test]
    fn test_nesting_limit_for_binary_chains() {
        let config = EnforestConfig::default().with_max_depth(3);
        assert!(parse_with("a + b + c + d;", &config).is_ok());

        let err = parse_with("a + b + c + d + e;", &config).unwrap_err();
        assert_eq!(err.to_string(), "expected at most 3 levels of nesting, found operator `+`");
        assert_eq!(err.span(), Span::new(14, 15));
    }

    #[test]
    fn test_nesting_limit_counts_enclosing_groups() {
        let config = EnforestConfig::default().with_max_depth(2);
        assert!(parse_with("(!x);", &config).is_ok());

        let err = parse_with("(!!x);", &config).unwrap_err();
        assert_eq!(err.to_string(), "expected at most 2 levels of nesting, found operator `!`");
    }

    #[test]
    fn test_nesting_limit_for_assignment_and_sequence_chains() {
        let config = EnforestConfig::default().with_max_depth(1);

        let err = parse_with("a = b = c;", &config).unwrap_err();
        assert_eq!(err.to_string(), "expected at most 1 levels of nesting, found operator `=`");
        assert_eq!(err.span(), Span::new(2, 3));

        let err = parse_with("a, b, c;", &config).unwrap_err();
        assert_eq!(err.to_string(), "expected at most 1 levels of nesting, found `,`");
        assert_eq!(err.span(), Span::new(4, 5));
    }

    #[test]
    fn test_default_nesting_limit_rejects_deep_input() {
        let depth = crate::config::DEFAULT_MAX_DEPTH + 10;
        let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
        let err = parse(&source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
    }
}
