//! Traversal order and handler dispatch through the generic walker

use rstest::{fixture, rstest};

use tagtree::domain::{Node, Tag, Tree, TreeBuilder};
use tagtree::parser::parse_tree;
use tagtree::util::testing;
use tagtree::visitor::{
    walk, DerivedVisitor, GenericVisitor, Handled, Order, Visit, Visitor, Walker,
};

fn init() {
    testing::init_test_setup();
}

/// first(1, second(2), second(3))
#[fixture]
fn scenario() -> Tree {
    let mut b = TreeBuilder::new();
    let left = b.leaf(Tag::Second, 2.0);
    let right = b.leaf(Tag::Second, 3.0);
    let root = b.node(Tag::First, 1.0, Some(left), Some(right));
    b.build(root)
}

/// Seven nodes, values 1..=7 assigned in inorder position.
#[fixture]
fn full() -> Tree {
    parse_tree(
        "second(4, first(2, second(1), first(3)), first(6, second(5), second(7)))",
    )
    .unwrap()
}

fn tagged_values(visits: &[Visit]) -> Vec<(Tag, f64)> {
    visits.iter().map(|v| (v.tag, v.value)).collect()
}

fn values(visits: &[Visit]) -> Vec<f64> {
    visits.iter().map(|v| v.value).collect()
}

/// Records the values it sees, overriding both handlers.
#[derive(Default)]
struct Recorder {
    seen: Vec<f64>,
}

impl Visitor for Recorder {
    fn handle_first(&mut self, node: &Node) -> Handled {
        self.seen.push(node.value());
        Handled::Custom("record first")
    }

    fn handle_second(&mut self, node: &Node) -> Handled {
        self.seen.push(node.value());
        Handled::Custom("record second")
    }
}

/// Overrides only `handle_first`, counting how often it ran.
#[derive(Default)]
struct FirstCounter {
    firsts: usize,
}

impl Visitor for FirstCounter {
    fn handle_first(&mut self, _node: &Node) -> Handled {
        self.firsts += 1;
        Handled::Custom("count first")
    }
}

// ============================================================
// Concrete scenario
// ============================================================

#[rstest]
#[case(Order::Pre, vec![(Tag::First, 1.0), (Tag::Second, 2.0), (Tag::Second, 3.0)])]
#[case(Order::In, vec![(Tag::Second, 2.0), (Tag::First, 1.0), (Tag::Second, 3.0)])]
#[case(Order::Post, vec![(Tag::Second, 2.0), (Tag::Second, 3.0), (Tag::First, 1.0)])]
fn given_scenario_tree_when_walking_then_visits_in_order(
    scenario: Tree,
    #[case] order: Order,
    #[case] expected: Vec<(Tag, f64)>,
) {
    init();
    let (_, visits) = walk(&scenario, GenericVisitor, order);

    assert_eq!(tagged_values(&visits), expected);
}

// ============================================================
// Order properties
// ============================================================

#[rstest]
fn given_left_self_right_tree_when_inorder_then_visits_a_b_c() {
    let tree = parse_tree("first(2, second(1), second(3))").unwrap();

    let (_, visits) = walk(&tree, GenericVisitor, Order::In);

    assert_eq!(values(&visits), vec![1.0, 2.0, 3.0]);
}

#[rstest]
fn given_full_tree_when_preorder_then_root_precedes_each_subtree(full: Tree) {
    let (_, visits) = walk(&full, GenericVisitor, Order::Pre);

    assert_eq!(values(&visits), vec![4.0, 2.0, 1.0, 3.0, 6.0, 5.0, 7.0]);
}

#[rstest]
fn given_full_tree_when_inorder_then_values_ascend(full: Tree) {
    let (_, visits) = walk(&full, GenericVisitor, Order::In);

    assert_eq!(values(&visits), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[rstest]
fn given_full_tree_when_postorder_then_root_comes_last(full: Tree) {
    let (_, visits) = walk(&full, GenericVisitor, Order::Post);

    assert_eq!(values(&visits), vec![1.0, 3.0, 2.0, 5.0, 7.0, 6.0, 4.0]);
}

#[rstest]
fn given_subtree_when_walking_from_it_then_only_subtree_is_visited(full: Tree) {
    let root = full.root().unwrap();
    let mut walker = Walker::new(&full, GenericVisitor);

    walker.postorder(full.right(root));

    assert_eq!(values(walker.visits()), vec![5.0, 7.0, 6.0]);
}

#[rstest]
fn given_one_sided_tree_when_walking_then_absent_children_are_skipped() {
    let tree = parse_tree("first(1, _, second(2, first(3), _))").unwrap();

    let (_, pre) = walk(&tree, GenericVisitor, Order::Pre);
    let (_, inorder) = walk(&tree, GenericVisitor, Order::In);
    let (_, post) = walk(&tree, GenericVisitor, Order::Post);

    assert_eq!(values(&pre), vec![1.0, 2.0, 3.0]);
    assert_eq!(values(&inorder), vec![1.0, 3.0, 2.0]);
    assert_eq!(values(&post), vec![3.0, 2.0, 1.0]);
}

// ============================================================
// Coverage
// ============================================================

#[rstest]
fn given_any_order_when_walking_then_each_node_is_visited_once(
    full: Tree,
    #[values(Order::Pre, Order::In, Order::Post)] order: Order,
) {
    let (recorder, visits) = walk(&full, Recorder::default(), order);

    assert_eq!(visits.len(), full.len());
    let mut seen = recorder.seen;
    seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(seen, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[rstest]
fn given_empty_tree_when_walking_then_no_visits(
    #[values(Order::Pre, Order::In, Order::Post)] order: Order,
) {
    let (recorder, visits) = walk(&Tree::empty(), Recorder::default(), order);

    assert!(visits.is_empty());
    assert!(recorder.seen.is_empty());
}

// ============================================================
// Dispatch
// ============================================================

#[rstest]
fn given_generic_visitor_when_walking_then_default_handler_runs_per_tag() {
    init();
    let tree = parse_tree("first(1, second(2))").unwrap();

    let (_, visits) = walk(&tree, GenericVisitor, Order::Pre);

    assert_eq!(
        visits.iter().map(|v| &v.handled).collect::<Vec<_>>(),
        vec![&Handled::Generic(Tag::First), &Handled::Generic(Tag::Second)]
    );
    assert_eq!(visits[0].handled.to_string(), "Generic handle first");
    assert_eq!(visits[1].handled.to_string(), "Generic handle second");
}

#[rstest]
fn given_derived_visitor_when_walking_then_first_is_overridden_and_second_defaults(
    scenario: Tree,
) {
    init();
    let (_, visits) = walk(&scenario, DerivedVisitor, Order::Pre);

    assert_eq!(
        visits.iter().map(|v| v.handled.clone()).collect::<Vec<_>>(),
        vec![
            Handled::Custom(DerivedVisitor::FIRST_LABEL),
            Handled::Generic(Tag::Second),
            Handled::Generic(Tag::Second),
        ]
    );
    assert_eq!(visits[0].handled.to_string(), "Handle first for derived");
}

#[rstest]
fn given_stateful_override_when_walking_then_state_reflects_only_first_nodes(full: Tree) {
    let (counter, visits) = walk(&full, FirstCounter::default(), Order::In);

    assert_eq!(counter.firsts, full.count(Tag::First));
    assert!(visits
        .iter()
        .filter(|v| v.tag == Tag::Second)
        .all(|v| v.handled == Handled::Generic(Tag::Second)));
}

#[rstest]
fn given_walker_when_walked_then_visitor_keeps_its_state(scenario: Tree) {
    let mut walker = Walker::new(&scenario, FirstCounter::default());

    walker.walk(Order::Pre);
    walker.walk(Order::Post);

    assert_eq!(walker.visitor().firsts, 2);
    let (counter, visits) = walker.into_parts();
    assert_eq!(counter.firsts, 2);
    assert!(visits.is_empty(), "walk hands its visits back to the caller");
}
