use arithmetic_engine::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    parse,
};
use pretty_assertions::assert_eq;

fn literal(value: f64, position: usize) -> Box<Expr> {
    Box::new(Expr::Literal { value, position })
}

#[test]
fn precedence_shapes_the_tree() {
    assert_eq!(parse("1 + 2 * 3").unwrap(),
               Expr::BinaryOp { left:     literal(1.0, 0),
                                op:       BinaryOperator::Add,
                                right:    Box::new(Expr::BinaryOp { left:     literal(2.0, 4),
                                                                    op:       BinaryOperator::Mul,
                                                                    right:    literal(3.0, 8),
                                                                    position: 6, }),
                                position: 2, });
}

#[test]
fn subtraction_groups_to_the_left() {
    assert_eq!(parse("5-2-1").unwrap(),
               Expr::BinaryOp { left:     Box::new(Expr::BinaryOp { left:     literal(5.0, 0),
                                                                    op:       BinaryOperator::Sub,
                                                                    right:    literal(2.0, 2),
                                                                    position: 1, }),
                                op:       BinaryOperator::Sub,
                                right:    literal(1.0, 4),
                                position: 3, });
}

#[test]
fn unary_minus_applies_to_groups() {
    assert_eq!(parse("-(4)").unwrap(),
               Expr::UnaryOp { op:       UnaryOperator::Neg,
                               operand:  literal(4.0, 2),
                               position: 0, });
}

#[test]
fn display_shows_grouping() {
    for (src, printed) in [("1 + 2 * 3", "(1 + (2 * 3))"),
                           ("(1 + 2) * 3", "((1 + 2) * 3)"),
                           ("8 / 4 / 2", "((8 / 4) / 2)"),
                           ("--2.5", "(-(-2.5))"),
                           ("+1 - -1", "((+1) - (-1))"),
                           ("7", "7")]
    {
        assert_eq!(parse(src).unwrap().to_string(), printed, "{src:?}");
    }
}

#[test]
fn positions_point_at_operators() {
    let ast = parse("  12 *  3").unwrap();
    assert_eq!(ast.position(), 5);
    assert_eq!(ast.depth(), 2);
}

#[test]
fn long_chains_print_and_drop() {
    let src = vec!["2"; 50_000].join("-");
    let ast = parse(&src).unwrap();
    let printed = ast.to_string();
    assert!(printed.starts_with(&"(".repeat(49_999)));
    assert_eq!(ast.depth(), 50_000);
}

#[test]
fn long_chains_compare_without_recursion() {
    let src = vec!["1"; 200_000].join("+");
    let first = parse(&src).unwrap();
    let second = parse(&src).unwrap();
    assert!(first == second);

    let other = parse(&format!("{src}+2")).unwrap();
    assert!(first != other);
}

#[test]
fn trees_differing_only_in_position_are_unequal() {
    assert!(parse("1+2").unwrap() != parse("1 +2").unwrap());
    assert!(parse("-1").unwrap() != parse("+1").unwrap());
}

#[test]
fn debug_matches_the_tree_structure() {
    assert_eq!(format!("{:?}", parse("2 * 3").unwrap()),
               "BinaryOp { left: Literal { value: 2.0, position: 0 }, op: Mul, right: Literal { \
                value: 3.0, position: 4 }, position: 2 }");
}

#[test]
fn long_chains_debug_print_without_recursion() {
    let src = vec!["1"; 200_000].join("*");
    let printed = format!("{:?}", parse(&src).unwrap());
    assert!(printed.starts_with(&"BinaryOp { left: ".repeat(1_000)));
    assert_eq!(printed.matches("op: Mul").count(), 199_999);
}
