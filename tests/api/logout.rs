use wiremock::{matchers::{header, method, path}, Mock, ResponseTemplate};

use crate::helpers::TestHandler;

#[actix_web::test]
async fn successful_logout_navigates_to_login(){
    let app = TestHandler::spawn().await;

    Mock::given(path("/auth/logout"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.logout_api)
        .await;

    app.handler.logout().await;

    assert_eq!(app.navigations(), vec![app.login_url()]);
    assert_eq!(app.handler.navigator().href(), app.login_url());
    assert!(app.error_entries().is_empty());
}

#[actix_web::test]
async fn rejected_logout_stays_on_the_page_without_logging(){
    let app = TestHandler::spawn().await;

    Mock::given(path("/auth/logout"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&app.logout_api)
        .await;

    app.handler.logout().await;

    assert!(app.navigations().is_empty());
    assert_eq!(app.handler.navigator().href(), app.base_url);
    assert!(app.error_entries().is_empty());
}

#[actix_web::test]
async fn server_error_is_treated_like_any_other_rejection(){
    let app = TestHandler::spawn().await;

    Mock::given(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.logout_api)
        .await;

    app.handler.logout().await;

    assert!(app.navigations().is_empty());
    assert!(app.error_entries().is_empty());
}

#[actix_web::test]
async fn unreachable_server_logs_a_single_failure(){
    let app = TestHandler::spawn_unreachable().await;

    app.handler.logout().await;

    assert!(app.navigations().is_empty());

    let errors = app.error_entries();
    assert_eq!(errors.len(), 1);

    let message = errors[0]["msg"].as_str().unwrap();
    assert!(message.contains("Logout failed"));

    let detail = errors[0]["error"].as_str().unwrap();
    assert!(detail.contains("Logout request could not be completed"));
}

#[actix_web::test]
async fn repeated_logouts_behave_the_same_each_time(){
    let app = TestHandler::spawn().await;

    Mock::given(path("/auth/logout"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.logout_api)
        .await;

    app.handler.logout().await;
    app.handler.logout().await;

    assert_eq!(app.navigations(), vec![app.login_url(), app.login_url()]);
    assert!(app.error_entries().is_empty());
}

#[actix_web::test]
async fn repeated_failures_log_once_per_attempt(){
    let app = TestHandler::spawn_unreachable().await;

    app.handler.logout().await;
    app.handler.logout().await;

    assert!(app.navigations().is_empty());
    assert_eq!(app.error_entries().len(), 2);
}

#[actix_web::test]
async fn redirect_ending_in_success_counts_as_logged_out(){
    let app = TestHandler::spawn().await;

    Mock::given(path("/auth/logout"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(303).insert_header("Location", "/auth/login"))
        .expect(1)
        .mount(&app.logout_api)
        .await;

    Mock::given(path("/auth/login"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.logout_api)
        .await;

    app.handler.logout().await;

    assert_eq!(app.navigations(), vec![app.login_url()]);
}

#[actix_web::test]
async fn logout_presents_the_session_cookie(){
    let app = TestHandler::spawn_with_session("signed-session-token").await;

    Mock::given(path("/auth/logout"))
        .and(method("POST"))
        .and(header("cookie", "access_token_cookie=signed-session-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.logout_api)
        .await;

    app.handler.logout().await;

    assert_eq!(app.navigations(), vec![app.login_url()]);
}
