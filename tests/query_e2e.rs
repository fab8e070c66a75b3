//! End-to-end coverage of the catalog query contract against the embedded
//! dataset.

use std::sync::Arc;

use serde_json::json;

use gsimql::{
    Catalog, CatalogRequest, EntityKind, Operation, QueryExecutor, Selection,
};

fn executor() -> QueryExecutor {
    QueryExecutor::new(Arc::new(
        Catalog::embedded().expect("embedded catalog must load"),
    ))
}

fn run(executor: &QueryExecutor, operation: Operation) -> serde_json::Value {
    let request = CatalogRequest::new(operation);
    executor
        .execute(&request)
        .expect("query must succeed")
        .data
}

#[test]
fn all_collection_operations_return_complete_collections() {
    let executor = executor();

    let expected = [
        (
            Operation::AllConcepts {
                select: Selection::new(),
            },
            3,
        ),
        (
            Operation::AllUnitTypes {
                select: Selection::new(),
            },
            5,
        ),
        (
            Operation::AllVariables {
                select: Selection::new(),
            },
            2,
        ),
        (
            Operation::AllRepresentedVariables {
                select: Selection::new(),
            },
            10,
        ),
        (
            Operation::AllQuestions {
                select: Selection::new(),
            },
            10,
        ),
        (
            Operation::AllQuestionBlocks {
                select: Selection::new(),
            },
            2,
        ),
    ];

    for (operation, count) in expected {
        let data = run(&executor, operation);
        let items = data.as_array().expect("collection result must be a list");
        assert_eq!(items.len(), count);

        // Store order, no duplicates, no omissions: ids are 0..count.
        let ids: Vec<u64> = items
            .iter()
            .map(|item| item["id"].as_u64().expect("id must be an integer"))
            .collect();
        let dense: Vec<u64> = (0..count as u64).collect();
        assert_eq!(ids, dense);
    }
}

#[test]
fn by_id_operations_return_the_matching_record() {
    let executor = executor();

    let data = run(
        &executor,
        Operation::Concept {
            id: 2,
            select: Selection::new(),
        },
    );
    assert_eq!(data["id"], json!(2));
    assert_eq!(data["name"], json!("Household"));

    let data = run(
        &executor,
        Operation::QuestionBlock {
            id: 1,
            select: Selection::new(),
        },
    );
    assert_eq!(data["name"], json!("Victimisation"));
    assert_eq!(data["questions"], json!([1, 2, 3, 4, 5, 6, 7, 8, 9]));
}

#[test]
fn absent_ids_yield_null_payloads_for_every_kind() {
    let executor = executor();

    let operations = [
        Operation::Concept {
            id: 404,
            select: Selection::new(),
        },
        Operation::UnitType {
            id: 404,
            select: Selection::new(),
        },
        Operation::Variable {
            id: 404,
            select: Selection::new(),
        },
        Operation::RepresentedVariable {
            id: 404,
            select: Selection::new(),
        },
        Operation::Question {
            id: 404,
            select: Selection::new(),
        },
        Operation::QuestionBlock {
            id: 404,
            select: Selection::new(),
        },
    ];

    for operation in operations {
        let data = run(&executor, operation);
        assert!(data.is_null(), "absent id must resolve to null");
    }
}

#[test]
fn sentinel_records_resolve_like_ordinary_data() {
    let executor = executor();

    let data = run(
        &executor,
        Operation::UnitType {
            id: 0,
            select: Selection::new(),
        },
    );
    assert!(!data.is_null());
    assert_eq!(data["name"], json!("UNIT TYPE"));
    assert_eq!(data["description"], json!("UNIT TYPE TBD"));
}

#[test]
fn victimisation_block_resolves_nine_questions_in_order() {
    let executor = executor();

    let data = run(
        &executor,
        Operation::QuestionBlock {
            id: 1,
            select: Selection::new().field("questions", Selection::new()),
        },
    );

    let questions = data["questions"]
        .as_array()
        .expect("questions must resolve to a list");
    assert_eq!(questions.len(), 9);
    for (position, question) in questions.iter().enumerate() {
        assert_eq!(question["id"], json!(position as u64 + 1));
    }
    assert_eq!(questions[8]["name"], json!("Sexual assault"));
}

#[test]
fn question_nine_chains_to_represented_variable_and_variable() {
    let executor = executor();

    let data = run(
        &executor,
        Operation::Question {
            id: 9,
            select: Selection::new().field(
                "representedVariable",
                Selection::new().field("variable", Selection::new()),
            ),
        },
    );

    let rv = &data["representedVariable"];
    assert_eq!(rv["id"], json!(9));
    assert_eq!(rv["name"], json!("RV Sexual assault "));
    assert_eq!(rv["isTypicallySensitive"], json!(true));

    let variable = &rv["variable"];
    assert_eq!(variable["id"], json!(1));
    assert_eq!(variable["name"], json!("Victimisation of Person"));
}

#[test]
fn variable_one_resolves_every_represented_variable() {
    let executor = executor();

    let data = run(
        &executor,
        Operation::Variable {
            id: 1,
            select: Selection::new().field("representedVariable", Selection::new()),
        },
    );

    let rvs = data["representedVariable"]
        .as_array()
        .expect("representedVariable must resolve to a list");
    let ids: Vec<u64> = rvs.iter().map(|rv| rv["id"].as_u64().unwrap()).collect();
    // Includes rv 8, whose reference was stored as the string "1" in the
    // source data and normalized at load.
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn dangling_reference_propagates_as_absence_not_error() {
    let executor = executor();

    // Social Episode is based on concept 3, which does not exist.
    let data = run(
        &executor,
        Operation::UnitType {
            id: 4,
            select: Selection::new().field("isBasedOn", Selection::new()),
        },
    );
    assert_eq!(data["name"], json!("Social Episode"));
    assert_eq!(data["isBasedOn"], json!([]));
}

#[test]
fn unselected_relationships_are_left_unresolved() {
    let executor = executor();

    let data = run(
        &executor,
        Operation::RepresentedVariable {
            id: 1,
            select: Selection::new(),
        },
    );
    // The stored reference id stays raw; no "variable" field appears.
    assert_eq!(data["takesMeaningFrom"], json!(1));
    assert!(data.get("variable").is_none());
}

#[test]
fn repeated_execution_is_idempotent() {
    let executor = executor();
    let request = CatalogRequest::new(Operation::AllQuestionBlocks {
        select: Selection::new().field("questions", Selection::new()),
    });

    let first = executor.execute(&request).unwrap().data;
    let second = executor.execute(&request).unwrap().data;
    assert_eq!(first, second);
}

#[test]
fn unknown_selection_field_is_a_query_error() {
    let executor = executor();
    let request = CatalogRequest::new(Operation::QuestionBlock {
        id: 1,
        select: Selection::new().field("variables", Selection::new()),
    });

    let err = executor.execute(&request).unwrap_err();
    assert!(err.is_query());
    let msg = format!("{err}");
    assert!(msg.contains("variables"));
    assert!(msg.contains(&format!("{}", EntityKind::QuestionBlock)));
}

#[test]
fn requests_round_trip_through_json() {
    let executor = executor();

    let raw = r#"{
        "version": "1.0",
        "request_id": "5f0c0f9e-6a11-4a3e-9f0a-1d2e3c4b5a69",
        "timestamp": "2018-03-14T09:30:00Z",
        "operation": {
            "op": "question",
            "args": {
                "id": 9,
                "select": {"representedVariable": {"variable": {}}}
            }
        }
    }"#;
    let request: CatalogRequest = serde_json::from_str(raw).unwrap();
    let response = executor.execute(&request).unwrap();

    assert_eq!(response.request_id, request.request_id);
    assert_eq!(
        response.data["representedVariable"]["variable"]["id"],
        json!(1)
    );

    // Responses serialize cleanly for the boundary layer.
    let rendered = serde_json::to_string(&response).unwrap();
    assert!(rendered.contains("representedVariable"));
}

#[test]
fn concurrent_reads_share_one_catalog() {
    let executor = executor();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let executor = executor.clone();
            std::thread::spawn(move || {
                run(
                    &executor,
                    Operation::AllRepresentedVariables {
                        select: Selection::new().field("variable", Selection::new()),
                    },
                )
            })
        })
        .collect();

    let mut results: Vec<serde_json::Value> = handles
        .into_iter()
        .map(|h| h.join().expect("reader thread must not panic"))
        .collect();
    let first = results.pop().unwrap();
    for other in results {
        assert_eq!(first, other);
    }
}
