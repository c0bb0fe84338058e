//! End-to-end API tests against an in-memory database.
//!
//! 每个测试构建独立的内存库 + 完整路由栈, 通过 tower 的 oneshot
//! 直接驱动请求, 不占用端口。

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use hr_server::auth::JwtConfig;
use hr_server::db::models::{Role, UserCreate};
use hr_server::db::repository::user;
use hr_server::{Config, ServerState};

fn test_config() -> Config {
    Config {
        database_path: ":memory:".to_string(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-key-0123456789abcdef".to_string(),
            expiration_minutes: 60,
            issuer: "hr-server".to_string(),
            audience: "hr-clients".to_string(),
        },
        environment: "test".to_string(),
        log_dir: None,
        smtp: None,
    }
}

async fn setup() -> (Router, ServerState) {
    let config = test_config();
    let state = ServerState::initialize_in_memory(&config)
        .await
        .expect("in-memory state");
    let app = hr_server::api::build_app(state.clone());
    (app, state)
}

/// Create an account directly and mint a token for it
async fn mint_user(
    state: &ServerState,
    username: &str,
    role: Role,
    employee_id: Option<i64>,
) -> String {
    let account = user::create(
        state.pool(),
        UserCreate {
            username: username.to_string(),
            email: None,
            password: "secret123".to_string(),
            role,
            employee_id,
        },
    )
    .await
    .expect("create user");

    state
        .jwt_service
        .generate_token(account.id, username, role, employee_id)
        .expect("mint token")
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.expect("request");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

async fn create_employee(app: &Router, admin: &str, name: &str) -> i64 {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/employees",
            Some(admin),
            Some(json!({ "full_name": name, "email": "emp@example.com" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().expect("employee id")
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let (app, _state) = setup().await;
    let (status, body) = send(&app, request("GET", "/", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn protected_routes_require_token() {
    let (app, _state) = setup().await;
    let (status, _) = send(&app, request("GET", "/employees", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        request("GET", "/employees", Some("not-a-real-token"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_login_me_roundtrip() {
    let (app, _state) = setup().await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/auth/register",
            None,
            Some(json!({
                "username": "alice",
                "password": "secret123",
                "role": "admin"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 重复用户名被拒绝
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/auth/register",
            None,
            Some(json!({
                "username": "alice",
                "password": "secret123",
                "role": "employee"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/auth/login",
            None,
            Some(json!({ "username": "alice", "password": "secret123" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().expect("token").to_string();

    let (status, body) = send(&app, request("GET", "/auth/me", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    // 口令散列不出现在任何响应里
    assert!(body.get("password_hash").is_none());

    // 错误口令统一 401, 消息不区分用户名不存在和口令错误
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/auth/login",
            None,
            Some(json!({ "username": "alice", "password": "wrong" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3004");

    let (status, unknown_user) = send(
        &app,
        request(
            "POST",
            "/auth/login",
            None,
            Some(json!({ "username": "nobody", "password": "wrong" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user["message"], body["message"]);
}

#[tokio::test]
async fn non_admin_cannot_list_employees_or_manage_users() {
    let (app, state) = setup().await;
    let employee_token = mint_user(&state, "bob", Role::Employee, None).await;

    let (status, _) = send(&app, request("GET", "/employees", Some(&employee_token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, request("GET", "/users", Some(&employee_token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        request("GET", "/stats/overview", Some(&employee_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn attendance_duplicate_day_rejected() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let emp_id = create_employee(&app, &admin, "Alice Nguyen").await;

    let payload = json!({
        "employee_id": emp_id,
        "date": "2025-03-03",
        "check_in": "09:00:00"
    });

    let (status, _) = send(
        &app,
        request("POST", "/attendances", Some(&admin), Some(payload.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request("POST", "/attendances", Some(&admin), Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn march_2025_payroll_scenario() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let emp_id = create_employee(&app, &admin, "Alice Nguyen").await;

    // 3 check-ins
    for day in ["2025-03-03", "2025-03-04", "2025-03-05"] {
        let (status, _) = send(
            &app,
            request(
                "POST",
                "/attendances",
                Some(&admin),
                Some(json!({
                    "employee_id": emp_id,
                    "date": day,
                    "check_in": "09:00:00",
                    "check_out": "18:00:00"
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // Approved leave 03-10..03-12 (3 days)
    let (status, leave) = send(
        &app,
        request(
            "POST",
            "/leaves",
            Some(&admin),
            Some(json!({
                "employee_id": emp_id,
                "start_date": "2025-03-10",
                "end_date": "2025-03-12",
                "reason": "family"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let leave_id = leave["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        request(
            "PUT",
            &format!("/leaves/{leave_id}/approve"),
            Some(&admin),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 3 attendance + 3 paid leave at 500,000/day -> 3,000,000
    let (status, payroll) = send(
        &app,
        request(
            "POST",
            "/payrolls/calculate",
            Some(&admin),
            Some(json!({
                "employee_id": emp_id,
                "year": 2025,
                "month": 3,
                "base_daily_salary": 500000.0
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payroll["attendance_days"], 3);
    assert_eq!(payroll["paid_leave_days"], 3);
    assert_eq!(payroll["gross_salary"], 3_000_000.0);
    assert_eq!(payroll["net_salary"], 3_000_000.0);

    // 同一员工同一月份重复入账 -> 400
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/payrolls/calculate",
            Some(&admin),
            Some(json!({
                "employee_id": emp_id,
                "year": 2025,
                "month": 3,
                "base_daily_salary": 500000.0
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn leave_state_machine_terminal_states() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let emp_id = create_employee(&app, &admin, "Alice Nguyen").await;

    let (_, leave) = send(
        &app,
        request(
            "POST",
            "/leaves",
            Some(&admin),
            Some(json!({
                "employee_id": emp_id,
                "start_date": "2025-06-02",
                "end_date": "2025-06-03"
            })),
        ),
    )
    .await;
    let leave_id = leave["id"].as_i64().unwrap();
    assert_eq!(leave["status"], "pending");

    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/leaves/{leave_id}/reject"),
            Some(&admin),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "rejected");

    // 终态不可再流转 -> 422
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/leaves/{leave_id}/approve"),
            Some(&admin),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E0005");

    // 终态不可再编辑 -> 422
    let (status, _) = send(
        &app,
        request(
            "PUT",
            &format!("/leaves/{leave_id}"),
            Some(&admin),
            Some(json!({ "reason": "changed my mind" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // end_date < start_date 被验证拦下
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/leaves",
            Some(&admin),
            Some(json!({
                "employee_id": emp_id,
                "start_date": "2025-06-10",
                "end_date": "2025-06-05"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn public_leave_submission_needs_no_token() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let emp_id = create_employee(&app, &admin, "Alice Nguyen").await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/leaves/public",
            None,
            Some(json!({
                "employee_id": emp_id,
                "start_date": "2025-07-01",
                "end_date": "2025-07-02",
                "reason": "walk-in request"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn payroll_and_leave_lists_scoped_to_own_employee() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let alice_id = create_employee(&app, &admin, "Alice Nguyen").await;
    let bob_id = create_employee(&app, &admin, "Bob Tran").await;

    for (emp, day) in [(alice_id, "2025-03-03"), (bob_id, "2025-03-04")] {
        let (status, _) = send(
            &app,
            request(
                "POST",
                "/attendances",
                Some(&admin),
                Some(json!({
                    "employee_id": emp,
                    "date": day,
                    "check_in": "09:00:00"
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    for emp in [alice_id, bob_id] {
        let (status, _) = send(
            &app,
            request(
                "POST",
                "/payrolls/calculate",
                Some(&admin),
                Some(json!({
                    "employee_id": emp,
                    "year": 2025,
                    "month": 3,
                    "base_daily_salary": 400000.0
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let alice_token = mint_user(&state, "alice", Role::Employee, Some(alice_id)).await;

    // 列表被强制限定到本人, 即使显式请求他人的 employee_id
    let uri = format!("/payrolls?employee_id={bob_id}");
    let (status, body) = send(&app, request("GET", &uri, Some(&alice_token), None)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("payroll list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee_id"], alice_id);

    // 他人单条记录直接 403, 不做静默过滤
    let (status, _) = send(
        &app,
        request(
            "GET",
            &format!("/employees/{bob_id}"),
            Some(&alice_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 自己的员工记录可见
    let (status, body) = send(
        &app,
        request(
            "GET",
            &format!("/employees/{alice_id}"),
            Some(&alice_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["full_name"], "Alice Nguyen");
}

#[tokio::test]
async fn my_attendance_calendar_classifies_days() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let emp_id = create_employee(&app, &admin, "Alice Nguyen").await;

    // Saturday check-in: present beats weekend
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/attendances",
            Some(&admin),
            Some(json!({
                "employee_id": emp_id,
                "date": "2025-03-08",
                "check_in": "09:00:00"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let alice_token = mint_user(&state, "alice", Role::Employee, Some(emp_id)).await;
    let (status, body) = send(
        &app,
        request(
            "GET",
            "/stats/my-attendance-calendar?year=2025&month=3",
            Some(&alice_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"].as_array().unwrap().len(), 31);
    assert_eq!(body["days"][7]["date"], "2025-03-08");
    assert_eq!(body["days"][7]["status"], "present");
    // 2025-03-01 is a Saturday without presence
    assert_eq!(body["days"][0]["status"], "weekend");
    assert_eq!(body["attendance_days"], 1);

    // 未关联员工的账户无法使用日历
    let unlinked = mint_user(&state, "carol", Role::Employee, None).await;
    let (status, _) = send(
        &app,
        request(
            "GET",
            "/stats/my-attendance-calendar?year=2025&month=3",
            Some(&unlinked),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn compliance_acknowledgement_flow() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let emp_id = create_employee(&app, &admin, "Alice Nguyen").await;
    let alice_token = mint_user(&state, "alice", Role::Employee, Some(emp_id)).await;

    let (status, policy) = send(
        &app,
        request(
            "POST",
            "/compliance/policies",
            Some(&admin),
            Some(json!({
                "title": "Code of Conduct",
                "code": "COC-1",
                "effective_date": "2025-01-01"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let policy_id = policy["id"].as_i64().unwrap();

    // 政策编码唯一
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/compliance/policies",
            Some(&admin),
            Some(json!({
                "title": "Duplicate",
                "code": "COC-1",
                "effective_date": "2025-02-01"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        request("GET", "/compliance/my-policies", Some(&alice_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["is_acknowledged"], false);

    let (status, first_ack) = send(
        &app,
        request(
            "POST",
            &format!("/compliance/policies/{policy_id}/acknowledge"),
            Some(&alice_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 幂等: 重复签收返回最初的时间戳
    let (status, second_ack) = send(
        &app,
        request(
            "POST",
            &format!("/compliance/policies/{policy_id}/acknowledge"),
            Some(&alice_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first_ack["acknowledged_at"], second_ack["acknowledged_at"]);

    let (status, body) = send(
        &app,
        request("GET", "/compliance/my-policies", Some(&alice_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["is_acknowledged"], true);

    // 管理员视角的签收名单
    let (status, acks) = send(
        &app,
        request(
            "GET",
            &format!("/compliance/policies/{policy_id}/acknowledgements"),
            Some(&admin),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(acks.as_array().unwrap().len(), 1);
    assert_eq!(acks[0]["employee_id"], emp_id);
}

#[tokio::test]
async fn performance_reviews_scoped_and_validated() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let alice_id = create_employee(&app, &admin, "Alice Nguyen").await;
    let bob_id = create_employee(&app, &admin, "Bob Tran").await;

    // score 超出范围 -> 400
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/performance-reviews",
            Some(&admin),
            Some(json!({
                "employee_id": alice_id,
                "period": "2025-Q1",
                "score": 9
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    for (emp, score) in [(alice_id, 4), (bob_id, 3)] {
        let (status, _) = send(
            &app,
            request(
                "POST",
                "/performance-reviews",
                Some(&admin),
                Some(json!({
                    "employee_id": emp,
                    "period": "2025-Q1",
                    "score": score
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // 员工列表自动限定到本人
    let alice_token = mint_user(&state, "alice", Role::Employee, Some(alice_id)).await;
    let (status, body) = send(
        &app,
        request("GET", "/performance-reviews", Some(&alice_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee_id"], alice_id);
    assert_eq!(rows[0]["score"], 4);

    // 他人的单条评估 -> 403
    let bob_review_id = {
        let (_, all) = send(
            &app,
            request(
                "GET",
                &format!("/performance-reviews?employee_id={bob_id}"),
                Some(&admin),
                None,
            ),
        )
        .await;
        all[0]["id"].as_i64().unwrap()
    };
    let (status, _) = send(
        &app,
        request(
            "GET",
            &format!("/performance-reviews/{bob_review_id}"),
            Some(&alice_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn report_exports_return_attachments() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let emp_id = create_employee(&app, &admin, "Alice Nguyen").await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/attendances",
            Some(&admin),
            Some(json!({
                "employee_id": emp_id,
                "date": "2025-03-03",
                "check_in": "09:00:00"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/payrolls/calculate",
            Some(&admin),
            Some(json!({
                "employee_id": emp_id,
                "year": 2025,
                "month": 3,
                "base_daily_salary": 500000.0
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for uri in [
        "/reports/payroll-excel",
        "/reports/payroll-pdf",
        "/reports/attendance-excel",
    ] {
        let response = app
            .clone()
            .oneshot(request("GET", uri, Some(&admin), None))
            .await
            .expect("request");
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .expect("content-disposition")
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"), "{uri}");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(!bytes.is_empty(), "{uri}");
    }

    // 员工可导出自己的工资条, 但不能导出他人的
    let alice_token = mint_user(&state, "alice", Role::Employee, Some(emp_id)).await;
    let uri = format!("/reports/payroll-slip-pdf?employee_id={emp_id}&year=2025&month=3");
    let (status, _) = send(&app, request("GET", &uri, Some(&alice_token), None)).await;
    assert_eq!(status, StatusCode::OK);

    let other = format!(
        "/reports/payroll-slip-pdf?employee_id={}&year=2025&month=3",
        emp_id + 1
    );
    let (status, _) = send(&app, request("GET", &other, Some(&alice_token), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn calendar_rejects_deleted_employee() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let emp_id = create_employee(&app, &admin, "Alice Nguyen").await;
    let alice_token = mint_user(&state, "alice", Role::Employee, Some(emp_id)).await;

    let (status, _) = send(
        &app,
        request("DELETE", &format!("/employees/{emp_id}"), Some(&admin), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 令牌里的 employee_id 已失效, 不返回空日历
    let (status, body) = send(
        &app,
        request(
            "GET",
            "/stats/my-attendance-calendar?year=2025&month=3",
            Some(&alice_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    // 管理员热力图对不存在的员工同样 404
    let uri = format!("/stats/attendance-heatmap?employee_id={emp_id}&year=2025&month=3");
    let (status, _) = send(&app, request("GET", &uri, Some(&admin), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_overview_counts() {
    let (app, state) = setup().await;
    let admin = mint_user(&state, "admin", Role::Admin, None).await;
    let emp_id = create_employee(&app, &admin, "Alice Nguyen").await;

    let (_, leave) = send(
        &app,
        request(
            "POST",
            "/leaves",
            Some(&admin),
            Some(json!({
                "employee_id": emp_id,
                "start_date": "2025-08-04",
                "end_date": "2025-08-05"
            })),
        ),
    )
    .await;
    assert_eq!(leave["status"], "pending");

    let (status, body) = send(
        &app,
        request("GET", "/dashboard/overview", Some(&admin), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_employees"], 1);
    assert_eq!(body["pending_leaves"], 1);
}
