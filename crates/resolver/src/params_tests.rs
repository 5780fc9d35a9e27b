// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use pw_config::{JobId, JobNode, Stage};
use std::collections::HashMap;

fn scope(pairs: &[(&str, Primitive)]) -> Scope {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect::<HashMap<_, _>>()
}

#[test]
fn null_parameters_resolve_to_null() {
    let scope = scope(&[]);
    assert!(resolve_parameters(None, Some(&scope)).unwrap().is_none());
}

#[test]
fn null_scope_returns_parameters_unchanged() {
    let mut params = HashMap::new();
    params.insert("x".to_string(), ParamValue::Primitive(Primitive::from("%{a}")));
    let result = resolve_parameters(Some(params.clone()), None).unwrap();
    assert_eq!(result.unwrap().get("x").unwrap().clone(), params["x"].clone());
}

#[test]
fn string_values_are_resolved() {
    let scope = scope(&[("a", Primitive::Int(1)), ("b", Primitive::Int(2)), ("bb", Primitive::Int(12))]);
    let mut params = HashMap::new();
    params.insert("x".to_string(), ParamValue::Primitive(Primitive::from("%{a*b - bb}")));
    let resolved = resolve_parameters(Some(params), Some(&scope)).unwrap().unwrap();
    let ParamValue::Primitive(value) = &resolved["x"] else {
        panic!("expected primitive");
    };
    assert_eq!(*value, Primitive::Int(-10));
}

#[test]
fn non_string_primitives_pass_through_unchanged() {
    let scope = scope(&[]);
    let mut params = HashMap::new();
    params.insert("n".to_string(), ParamValue::Primitive(Primitive::Int(5)));
    let resolved = resolve_parameters(Some(params), Some(&scope)).unwrap().unwrap();
    assert!(matches!(resolved["n"], ParamValue::Primitive(Primitive::Int(5))));
}

#[test]
fn lists_pass_through_unchanged() {
    let scope = scope(&[]);
    let mut params = HashMap::new();
    params.insert(
        "list".to_string(),
        ParamValue::List(vec![Primitive::Int(1), Primitive::from("%{a}")]),
    );
    let resolved = resolve_parameters(Some(params), Some(&scope)).unwrap().unwrap();
    assert!(matches!(&resolved["list"], ParamValue::List(l) if l.len() == 2));
}

#[test]
fn nested_stage_parameters_pass_through_unchanged() {
    let scope = scope(&[]);
    let nested = Stage::Job(JobNode {
        id: JobId::new("job-1"),
        name: "inner".into(),
        function: "a.b".into(),
        parameters: None,
        mutable: false,
    });
    let mut params = HashMap::new();
    params.insert("child".to_string(), ParamValue::Stage(Box::new(nested)));
    let resolved = resolve_parameters(Some(params), Some(&scope)).unwrap().unwrap();
    assert!(matches!(resolved["child"], ParamValue::Stage(_)));
}

#[test]
fn resolving_twice_is_idempotent_once_settled() {
    let scope = scope(&[("a", Primitive::Int(1))]);
    let mut params = HashMap::new();
    params.insert("x".to_string(), ParamValue::Primitive(Primitive::from("%{a}")));
    let once = resolve_parameters(Some(params), Some(&scope)).unwrap();
    let twice = resolve_parameters(once.clone(), Some(&scope)).unwrap();
    let ParamValue::Primitive(a) = &once.unwrap()["x"] else { panic!() };
    let ParamValue::Primitive(b) = &twice.unwrap()["x"] else { panic!() };
    assert_eq!(a, b);
}
