use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use workforce_server::http::{router, AppState};
use workforce_server::lifecycle::WorkforceSystem;
use workforce_server::model::{CompanyCreate, EmployeeCreate};

/// Fresh stores per test; the system is kept alive by the router's clients.
fn app() -> (Router, AppState) {
    let system = WorkforceSystem::new(32);
    let state = AppState::from_system(&system);
    (router(state.clone()), state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn employee(name: &str, age: i32, gender: &str, salary: f64) -> EmployeeCreate {
    EmployeeCreate {
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        salary,
    }
}

// --- Employees ---

#[tokio::test]
async fn should_return_created_employee_when_post() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"name": "John Smith", "age": 32, "gender": "Male", "salary": 5000.0})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_u64());
    assert_eq!(body["name"], "John Smith");
    assert_eq!(body["age"], 32);
    assert_eq!(body["gender"], "Male");
    assert_eq!(body["salary"], 5000.0);
}

#[tokio::test]
async fn should_ignore_client_supplied_id_on_post() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/employees",
        Some(json!({"id": 99, "name": "Mike", "age": 23, "gender": "Male", "salary": 6000.0})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 0);
}

#[tokio::test]
async fn should_return_employee_when_get_employee_with_id_exist() {
    let (app, state) = app();
    let expected = state
        .employees
        .create_employee(employee("Mike", 23, "Male", 6000.0))
        .await
        .unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/employees/{}", expected.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 0, "name": "Mike", "age": 23, "gender": "Male", "salary": 6000.0}));
}

#[tokio::test]
async fn should_return_not_found_when_get_missing_employee() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::GET, "/employees/5", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found with id: 5");
}

#[tokio::test]
async fn should_return_males_employee_when_get_employees_by_gender() {
    let (app, state) = app();
    let mike = state
        .employees
        .create_employee(employee("Mike", 23, "Male", 6000.0))
        .await
        .unwrap();
    state
        .employees
        .create_employee(employee("lily", 23, "Female", 6000.0))
        .await
        .unwrap();

    let (status, body) = send(&app, Method::GET, "/employees?gender=male", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([mike]));
}

#[tokio::test]
async fn should_treat_empty_query_values_as_absent() {
    let (app, state) = app();
    let first = state
        .employees
        .create_employee(employee("Mike", 23, "Male", 6000.0))
        .await
        .unwrap();
    let second = state
        .employees
        .create_employee(employee("Lily", 25, "Female", 7000.0))
        .await
        .unwrap();

    let (status, body) = send(&app, Method::GET, "/employees?gender=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([first, second]));

    let (status, body) = send(&app, Method::GET, "/employees?gender=&page=&pageSize=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([first, second]));
}

#[tokio::test]
async fn should_return_employees_when_get_employees_list() {
    let (app, state) = app();
    let first = state
        .employees
        .create_employee(employee("Mike", 23, "Male", 6000.0))
        .await
        .unwrap();
    let second = state
        .employees
        .create_employee(employee("Lily", 25, "Female", 7000.0))
        .await
        .unwrap();

    let (status, body) = send(&app, Method::GET, "/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([first, second]));
}

#[tokio::test]
async fn should_page_employees_ignoring_gender() {
    let (app, state) = app();
    for (name, gender) in [("a", "Male"), ("b", "Female"), ("c", "Male")] {
        state
            .employees
            .create_employee(employee(name, 30, gender, 1000.0))
            .await
            .unwrap();
    }

    let (status, body) = send(&app, Method::GET, "/employees?gender=male&page=1&pageSize=2", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body.as_array().unwrap().iter().map(|e| e["name"].clone()).collect();
    assert_eq!(names, vec![json!("a"), json!("b")]);
}

#[tokio::test]
async fn should_return_employee_when_update_an_employee_info() {
    let (app, state) = app();
    let created = state
        .employees
        .create_employee(employee("Mike", 23, "Male", 6000.0))
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/employees/{}", created.id),
        Some(json!({"name": "Michael", "age": 24, "gender": "Male", "salary": 6500.0})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 0, "name": "Michael", "age": 24, "gender": "Male", "salary": 6500.0}));
}

#[tokio::test]
async fn should_return_not_found_when_update_missing_employee() {
    let (app, _) = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/employees/9",
        Some(json!({"name": "Michael", "age": 24, "gender": "Male", "salary": 6500.0})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found with id: 9");
}

#[tokio::test]
async fn should_return_not_found_for_employee_id_outside_id_range() {
    let (app, _) = app();

    for raw in ["-1", "4294967296"] {
        let (status, body) = send(&app, Method::GET, &format!("/employees/{raw}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], format!("Employee not found with id: {raw}"));
    }
}

#[tokio::test]
async fn should_delete_employee_and_then_not_find_it() {
    let (app, state) = app();
    let created = state
        .employees
        .create_employee(employee("Mike", 23, "Male", 6000.0))
        .await
        .unwrap();
    let uri = format!("/employees/{}", created.id);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found with id: 0");
}

// --- Companies ---

#[tokio::test]
async fn should_return_created_company_when_post() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::POST, "/companies", Some(json!({"name": "Spring"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_u64());
    assert_eq!(body["name"], "Spring");
}

#[tokio::test]
async fn should_return_company_when_get_company_with_id_exist() {
    let (app, state) = app();
    state
        .companies
        .create_company(CompanyCreate {
            name: "Spring".into(),
        })
        .await
        .unwrap();
    let google = state
        .companies
        .create_company(CompanyCreate {
            name: "Google".into(),
        })
        .await
        .unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/companies/{}", google.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Google"}));
}

#[tokio::test]
async fn should_return_companies_when_get_companies_list() {
    let (app, state) = app();
    for name in ["Spring", "Google"] {
        state
            .companies
            .create_company(CompanyCreate { name: name.into() })
            .await
            .unwrap();
    }

    let (status, body) = send(&app, Method::GET, "/companies", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 0, "name": "Spring"}, {"id": 1, "name": "Google"}]));
}

#[tokio::test]
async fn should_return_page_query_info_when_page_query_with_page_1_and_size_5() {
    let (app, state) = app();
    for i in 1..=6 {
        state
            .companies
            .create_company(CompanyCreate {
                name: format!("Company{i}"),
            })
            .await
            .unwrap();
    }

    let (status, body) = send(&app, Method::GET, "/companies?page=1&pageSize=5", None).await;

    assert_eq!(status, StatusCode::OK);
    let companies = body.as_array().unwrap();
    assert_eq!(companies.len(), 5);
    assert_eq!(companies[0]["name"], "Company1");
    assert_eq!(companies[4]["name"], "Company5");

    let (status, body) = send(&app, Method::GET, "/companies?page=4&pageSize=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_return_all_companies_when_page_values_are_empty() {
    let (app, state) = app();
    for name in ["Spring", "Google"] {
        state
            .companies
            .create_company(CompanyCreate { name: name.into() })
            .await
            .unwrap();
    }

    let (status, body) = send(&app, Method::GET, "/companies?page=&pageSize=", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 0, "name": "Spring"}, {"id": 1, "name": "Google"}]));
}

#[tokio::test]
async fn should_return_company_when_update_a_company_info() {
    let (app, state) = app();
    let created = state
        .companies
        .create_company(CompanyCreate {
            name: "Spring".into(),
        })
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/companies/{}", created.id),
        Some(json!({"name": "Spring Framework"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 0, "name": "Spring Framework"}));
}

#[tokio::test]
async fn should_return_not_found_when_update_missing_company() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::PUT, "/companies/3", Some(json!({"name": "Nope"}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Company not found with id: 3");
}

#[tokio::test]
async fn should_return_not_found_for_negative_company_id() {
    let (app, state) = app();
    state
        .companies
        .create_company(CompanyCreate {
            name: "Spring".into(),
        })
        .await
        .unwrap();

    let requests = [
        (Method::GET, None),
        (Method::PUT, Some(json!({"name": "Nope"}))),
        (Method::DELETE, None),
    ];
    for (method, body) in requests {
        let (status, body) = send(&app, method, "/companies/-1", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Company not found with id: -1");
    }

    // Nothing was removed
    let (_, body) = send(&app, Method::GET, "/companies", None).await;
    assert_eq!(body, json!([{"id": 0, "name": "Spring"}]));
}

#[tokio::test]
async fn should_return_response_code_when_delete_a_company() {
    let (app, state) = app();
    let created = state
        .companies
        .create_company(CompanyCreate {
            name: "Spring".into(),
        })
        .await
        .unwrap();

    let (status, _) = send(&app, Method::DELETE, &format!("/companies/{}", created.id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, "/companies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
