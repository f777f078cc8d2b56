use std::rc::Rc;

use approx::assert_relative_eq;

use rebind_core::{Journal, Origin, Sink};
use rebind_demo::{ARGUMENTS, bindings, run, summary};

fn journal_sink() -> (Journal, Rc<dyn Sink>) {
    let journal = Journal::new();
    let sink: Rc<dyn Sink> = Rc::new(journal.clone());
    (journal, sink)
}

#[test]
fn summary_names_the_arguments() {
    assert_eq!(
        summary(ARGUMENTS),
        "Test stored functions with arguments: x = 1, y = 2, z = 3"
    );
}

#[test]
fn prints_one_line_per_stored_function() {
    let (journal, sink) = journal_sink();

    run(&sink).expect("demo bindings are valid");

    assert_eq!(
        journal.lines(),
        [
            "foo_fn called with arguments: 1, 2, 3 result is : 6",
            "FooStruct::foo_fn called with arguments: 1, 2, 3 result is : 6",
            "FooStruct::foo_fn_4 called with arguments: 1, 3, 2, 0 result is : 6",
            "FooStruct::call called with arguments: 1, 2, 3 result is : 6",
            "closure called with arguments: 1, 2, 3 result is : 6",
        ]
    );
}

#[test]
fn stored_functions_cover_every_origin_in_order() {
    let (_journal, sink) = journal_sink();
    let bindings = bindings(&sink).expect("demo bindings are valid");

    assert_eq!(
        bindings.origins(),
        [
            Origin::Function,
            Origin::BoundMethod,
            Origin::AdaptedMethod,
            Origin::CallableObject,
            Origin::Closure,
        ]
    );
}

#[test]
fn every_result_is_six() {
    let (journal, sink) = journal_sink();
    let bindings = bindings(&sink).expect("demo bindings are valid");

    for result in bindings.collect(ARGUMENTS) {
        assert_relative_eq!(result, 6.0);
    }
    assert_eq!(journal.len(), 5);
}

#[test]
fn other_arguments_flow_through_the_plan() {
    let (journal, sink) = journal_sink();
    let bindings = bindings(&sink).expect("demo bindings are valid");

    let results = bindings.collect((10, 0.5, -4.0));

    for result in results {
        assert_relative_eq!(result, 6.5);
    }
    assert_eq!(
        journal.lines()[2],
        "FooStruct::foo_fn_4 called with arguments: 10, -4, 0.5, 0 result is : 6.5"
    );
}
