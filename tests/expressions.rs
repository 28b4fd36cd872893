use redex::{
    ast::{Element, Expr},
    build_ast,
    engine::{
        evaluator::evaluate_ast,
        inflator::{DEFAULT_MAX_DEPTH, Fragment, inflate, inflate_with_limit},
        lexer::Token,
        reducer::reduce,
    },
    evaluate, tokenize,
};

fn assert_evaluates(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert_eq!(value, expected, "{src} evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("{src} failed to evaluate: {e}"),
    }
}

fn assert_build_fails_with(src: &str, needle: &str) {
    match build_ast(src) {
        Ok(_) => panic!("{src} built an AST but was expected to fail"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(needle),
                    "error for {src} was \"{message}\", expected it to mention \"{needle}\"");
        },
    }
}

fn number(text: &str) -> Token {
    Token::Number(text.to_string())
}

#[test]
fn lexes_simple_plus() {
    let tokens = tokenize("1611 + 32").expect("tokenize failed");
    assert_eq!(tokens, vec![number("1611"), Token::Plus, number("32")]);
}

#[test]
fn lexes_parentheses() {
    let tokens = tokenize("1611 + (32 - 111)").expect("tokenize failed");
    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[0], number("1611"));
    assert_eq!(tokens[2], Token::LParen);
    assert_eq!(tokens[6], Token::RParen);
}

#[test]
fn lexes_spaced_brackets() {
    let tokens = tokenize("11 + ( 22 + 33 )").expect("tokenize failed");
    assert_eq!(tokens[2], Token::LParen);
    assert_eq!(tokens[6], Token::RParen);
}

#[test]
fn lexes_vars() {
    let tokens = tokenize("a - b2").expect("tokenize failed");
    assert_eq!(tokens,
               vec![Token::Var("a".to_string()),
                    Token::Minus,
                    Token::Var("b2".to_string())]);
}

#[test]
fn lexes_digit_run_followed_by_letters() {
    // Nothing is dropped and nothing is rejected lexically; the reducer
    // rejects the juxtaposition instead.
    let tokens = tokenize("12ab").expect("tokenize failed");
    assert_eq!(tokens, vec![number("12"), Token::Var("ab".to_string())]);
    assert_build_fails_with("12ab", "unexpected");
}

#[test]
fn rejects_invalid_char() {
    let message = tokenize("1 + $2").expect_err("$ should not lex").to_string();
    assert!(message.contains("invalid char"), "got \"{message}\"");
    assert!(tokenize("1 % 2").is_err());
}

#[test]
fn tokenizing_a_lexeme_is_idempotent() {
    let tokens = tokenize("7 + (x1 - 22) * 9 / abc").expect("tokenize failed");
    assert!(!tokens.is_empty());

    for token in tokens {
        let relexed = tokenize(&token.to_string()).expect("lexeme failed to re-tokenize");
        assert_eq!(relexed, vec![token]);
    }
}

#[test]
fn inflates_top_level_shape() {
    let tokens = tokenize("11 + (22 - (33 + 9) * 44)").expect("tokenize failed");
    let fragments = inflate(&tokens).expect("inflate failed");

    assert_eq!(fragments.len(), 3);
    assert_eq!(fragments[0], Fragment::Token(number("11")));
    assert_eq!(fragments[1], Fragment::Token(Token::Plus));
    assert!(matches!(fragments[2], Fragment::Group(_)));
}

#[test]
fn inflation_rejects_unmatched_parens() {
    let stray_close = tokenize("1+1)").expect("tokenize failed");
    let message = inflate(&stray_close).expect_err("stray ) should not inflate")
                                       .to_string();
    assert!(message.contains("invalid token list"), "got \"{message}\"");
    assert!(message.contains("unexpected"), "got \"{message}\"");

    let unclosed = tokenize("(((").expect("tokenize failed");
    let message = inflate(&unclosed).expect_err("unclosed ( should not inflate")
                                    .to_string();
    assert!(message.contains("unexpected"), "got \"{message}\"");
}

#[test]
fn inflation_enforces_depth_limit() {
    let tokens = tokenize("((((1))))").expect("tokenize failed");

    assert!(inflate_with_limit(&tokens, 4).is_ok());
    let message = inflate_with_limit(&tokens, 3).expect_err("depth 4 should exceed limit 3")
                                                .to_string();
    assert!(message.contains("invalid token list"), "got \"{message}\"");

    // Within the default limit, deep nesting still evaluates.
    let deep = format!("{}1{}", "(".repeat(DEFAULT_MAX_DEPTH), ")".repeat(DEFAULT_MAX_DEPTH));
    assert_evaluates(&deep, 1.0);
    let too_deep = format!("{}1{}",
                           "(".repeat(DEFAULT_MAX_DEPTH + 1),
                           ")".repeat(DEFAULT_MAX_DEPTH + 1));
    assert!(evaluate(&too_deep).is_err());
}

#[test]
fn builds_expected_ast_shape() {
    let ast = build_ast("11 + 22 * 33").expect("build_ast failed");

    assert!(matches!(ast, Expr::Additive { .. }));
    assert_eq!(ast.children().len(), 3);

    let [left, operator, right] = ast.children() else {
        panic!("root should have exactly 3 children");
    };
    let Element::SubExpr(left) = left else {
        panic!("left child should be a node");
    };
    assert!(matches!(left, Expr::Additive { .. }));
    assert_eq!(left.children().len(), 1);

    assert_eq!(*operator, Element::Token(Token::Plus));

    let Element::SubExpr(right) = right else {
        panic!("right child should be a node");
    };
    assert!(matches!(right, Expr::Multiplicative { .. }));
    assert_eq!(right.children().len(), 3);
}

#[test]
fn parenthesis_tokens_never_reach_the_ast() {
    fn check(element: &Element) {
        match element {
            Element::SubExpr(node) => node.children().iter().for_each(check),
            Element::Token(token) => {
                assert!(!matches!(token, Token::LParen | Token::RParen));
            },
        }
    }

    let ast = build_ast("(1 + 1) * (2 - (3 / 4))").expect("build_ast failed");
    ast.children().iter().for_each(check);
}

#[test]
fn calculates_expressions() {
    assert_evaluates(" 1+1 ", 2.0);
    assert_evaluates("2-1", 1.0);
    assert_evaluates("9 - 8 * 11 /2 + 2", -33.0);
    assert_evaluates(" 5 * (100 + 99 / 3) ", 665.0);
    assert_evaluates("(1+1)", 2.0);
    assert_evaluates("(9 - 8 / 2 - 1 + ( 5 * (100 + 99 / 3) ) )", 669.0);
    assert_evaluates("22", 22.0);
    assert_evaluates("(1 + 1)*2", 4.0);
    assert_evaluates("(9 - 1) * 11 * 1", 88.0);
    assert_evaluates("(9 - 8 / 2 - 1 + ( 5 * (100 + 99 / 3) ) ) * 11 /2 + 2", 3681.5);
    assert_evaluates("11 + (22 - (33 + 9) * 44)", -1815.0);
}

#[test]
fn division_is_left_associative_and_real_valued() {
    assert_evaluates("8/2/2", 2.0);
    assert_evaluates("100/5/2", 10.0);
    assert_evaluates("10-3-4", 3.0);
    assert_evaluates("7/2", 3.5);
}

#[test]
fn whitespace_is_the_only_separator() {
    assert_evaluates("1 +\t2 +\n3", 6.0);
}

#[test]
fn rejects_invalid_expressions() {
    assert_build_fails_with("1 +", "expect");
    assert_build_fails_with("1 ++", "after");
    assert_build_fails_with("1 **", "after");
    assert_build_fails_with("1 *-", "after");
    assert_build_fails_with("+ 99", "expect");
    assert_build_fails_with("(((", "unexpected");
    assert_build_fails_with("1+1)", "unexpected");
    assert_build_fails_with("(9 - 8 / 2 - 1 + ( 5 * (100 + 99 / 3) ) )) * 11 /2 + 2",
                            "unexpected");
    assert_build_fails_with("1+()", "unexpected");
    assert_build_fails_with("1+1(3-2)", "unexpected");
    assert_build_fails_with("11 22", "expect");
    assert_build_fails_with("", "expect");
}

#[test]
fn build_then_evaluate_matches_direct_evaluation() {
    for src in ["22",
                " 1+1 ",
                "9 - 8 * 11 /2 + 2",
                "(9 - 8 / 2 - 1 + ( 5 * (100 + 99 / 3) ) ) * 11 /2 + 2",
                "11 + (22 - (33 + 9) * 44)"]
    {
        let ast = build_ast(src).expect("build_ast failed");
        let via_ast = evaluate_ast(&ast).expect("evaluate_ast failed");
        let direct = evaluate(src).expect("evaluate failed");
        assert_eq!(via_ast, direct, "composition law broken for {src}");
    }
}

#[test]
fn variables_build_but_never_evaluate() {
    let ast = build_ast("a + 1").expect("identifiers should build");
    let message = evaluate_ast(&ast).expect_err("identifiers should not evaluate")
                                    .to_string();
    assert!(message.contains("variable"), "got \"{message}\"");
    assert!(evaluate("a + 1").is_err());
}

#[test]
fn evaluator_rejects_malformed_trees() {
    // Hand-built trees that the reducer would never produce.
    let wrong_class =
        Expr::Additive { children: vec![Element::Token(number("1")),
                                        Element::Token(Token::Star),
                                        Element::Token(number("2"))], };
    let message = evaluate_ast(&wrong_class).expect_err("wrong operator class should fail")
                                            .to_string();
    assert!(message.contains("\"*\""), "got \"{message}\"");

    let bad_arity = Expr::Multiplicative { children: vec![Element::Token(number("1")),
                                                          Element::Token(Token::Star)], };
    assert!(evaluate_ast(&bad_arity).is_err());

    let empty = Expr::Additive { children: Vec::new() };
    assert!(evaluate_ast(&empty).is_err());
}

#[test]
fn reduces_a_plain_token_list() {
    // The reducer also accepts a structure with no groups at all.
    let fragments: Vec<Fragment> =
        tokenize("11 + 22 * 33").expect("tokenize failed")
                                .into_iter()
                                .map(Fragment::Token)
                                .collect();
    let ast = reduce(&fragments).expect("reduce failed");
    assert_eq!(evaluate_ast(&ast).expect("evaluate_ast failed"), 737.0);
}

#[test]
fn renders_the_tree_with_one_label_per_line() {
    let ast = build_ast("1 + 2").expect("build_ast failed");
    let rendered = ast.to_string();

    assert!(rendered.starts_with("AdditiveExpression\n"));
    assert!(rendered.contains("MultiplicativeExpression"));
    assert!(rendered.lines().any(|line| line.trim() == "+"));
    assert!(rendered.lines().any(|line| line.trim() == "2"));
}
