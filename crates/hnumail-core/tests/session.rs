//! End-to-end session tests against a mock backend.
//!
//! These drive the public view-model and navigator the way the desktop
//! client does, without a real server.

#![allow(clippy::unwrap_used)]

use mockito::{Matcher, Server, ServerGuard};

use hnumail_core::{
    BroadcastRequest, ClientConfig, Credentials, Folder, MailViewModel, Navigator, Route,
    UserStatus, validation,
};

const USER_SESSION: &str = r#"{"token":"jwt-user","type":"Bearer","id":1,"username":"alice","email":"alice@hnu.edu.cn","role":"ROLE_USER"}"#;
const ADMIN_SESSION: &str = r#"{"token":"jwt-admin","type":"Bearer","id":9,"username":"root","email":"root@hnu.edu.cn","role":"ROLE_ADMIN"}"#;
const ACK: &str = r#"{"success":true,"message":"ok"}"#;
const INBOX: &str = r#"{
    "content": [
        {"id": 11, "from": "bob@hnu.edu.cn", "to": "alice@hnu.edu.cn", "subject": "Lab",
         "content": "See you", "sentAt": "2024-05-01T09:30:00", "folder": "INBOX",
         "isRead": false, "isStarred": null, "size": 120, "attachments": null}
    ],
    "totalElements": 1, "totalPages": 1, "number": 0, "size": 20
}"#;

fn client_for(server: &ServerGuard) -> MailViewModel {
    MailViewModel::new(&ClientConfig::with_base_url(server.url())).unwrap()
}

async fn mock_login(server: &mut ServerGuard, body: &str) {
    server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
}

#[tokio::test]
async fn test_user_reads_and_trashes_mail_then_logs_out() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, USER_SESSION).await;
    let inbox = server
        .mock("GET", "/api/mail/inbox")
        .match_header("authorization", "Bearer jwt-user")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "0".into()),
            Matcher::UrlEncoded("size".into(), "20".into()),
        ]))
        .with_status(200)
        .with_body(INBOX)
        .expect(2)
        .create_async()
        .await;
    server
        .mock("GET", "/api/mail/11")
        .with_status(200)
        .with_body(r#"{"id":11,"from":"bob@hnu.edu.cn","subject":"Lab","content":"See you"}"#)
        .create_async()
        .await;
    let trash = server
        .mock("PUT", "/api/mail/11/move")
        .match_query(Matcher::UrlEncoded("folder".into(), "TRASH".into()))
        .with_status(200)
        .with_body(ACK)
        .create_async()
        .await;
    server
        .mock("POST", "/api/auth/logout")
        .with_status(200)
        .with_body(ACK)
        .create_async()
        .await;

    let vm = client_for(&server);
    let mut nav = Navigator::default();

    let credentials = Credentials::new("alice", "secret1");
    assert!(validation::validate_login(&credentials).is_ok());
    assert!(vm.login(credentials).await.success().is_some());
    nav.navigate_pop_up_to(Route::EmailList, Route::Login, true);
    assert!(!nav.contains_screen(Route::Login));

    let page = vm.load_folder(Folder::Inbox, 0).await.into_success().unwrap();
    assert_eq!(page.content.len(), 1);
    assert!(!page.content[0].is_read);
    assert!(!page.content[0].is_starred);

    nav.navigate(Route::EmailDetail(11));
    let email = vm.load_email(11).await.into_success().unwrap();
    assert_eq!(email.subject, "Lab");

    assert!(vm.move_to_folder(11, Folder::Trash).await.success().is_some());
    assert!(nav.back());
    assert_eq!(nav.current(), Route::EmailList);

    trash.assert_async().await;
    inbox.assert_async().await;

    assert!(vm.logout().await.is_terminal());
    nav.reset_to(Route::Login);
    assert!(!vm.client().has_token());
    assert!(vm.slots().inbox.get().is_idle());
    assert!(vm.session().is_none());
    assert_eq!(nav.history(), &[Route::Login]);
}

#[tokio::test]
async fn test_admin_disables_user_and_broadcasts() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, ADMIN_SESSION).await;
    server
        .mock("GET", "/api/admin/users")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"content":[{"id":4,"username":"dave","email":"dave@hnu.edu.cn","role":"USER","status":"ACTIVE"}],
                "totalElements":1,"totalPages":1,"number":0,"size":20}"#,
        )
        .expect_at_least(2)
        .create_async()
        .await;
    let disable = server
        .mock("PUT", "/api/admin/users/4/status")
        .match_query(Matcher::UrlEncoded("status".into(), "DISABLED".into()))
        .with_status(200)
        .with_body(ACK)
        .create_async()
        .await;
    let broadcast = server
        .mock("POST", "/api/admin/mail/broadcast")
        .match_header("authorization", "Bearer jwt-admin")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "subject": "Maintenance",
            "recipientIds": [4]
        })))
        .with_status(200)
        .with_body(ACK)
        .create_async()
        .await;

    let vm = client_for(&server);
    let session = vm
        .login(Credentials::new("root", "secret1"))
        .await
        .into_success()
        .unwrap();
    assert!(session.is_admin());
    assert!(Route::UserManagement.requires_admin());

    let users = vm.load_users(0).await.into_success().unwrap();
    let dave = &users[0];
    assert_eq!(dave.status, UserStatus::Active);

    let outcome = vm.update_user_status(dave.id, dave.status.toggled()).await;
    assert!(outcome.success().is_some());
    disable.assert_async().await;

    let request = BroadcastRequest {
        subject: "Maintenance".to_string(),
        content: "Tonight 22:00".to_string(),
        recipient_groups: Vec::new(),
        recipient_ids: vec![dave.id],
    };
    assert!(validation::validate_broadcast(&request.subject, &request.content).is_ok());
    assert!(vm.broadcast(request).await.success().is_some());
    broadcast.assert_async().await;
}

#[tokio::test]
async fn test_resume_latest_draft_round_trip() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, USER_SESSION).await;
    server
        .mock("GET", "/api/mail/draft")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"content":[
                {"id":3,"subject":"old","sentAt":"2024-01-01T08:00:00","folder":"DRAFT"},
                {"id":4,"subject":"new","sentAt":"2024-03-01T08:00:00","folder":"DRAFT"}
            ],"totalElements":2,"totalPages":1,"number":0,"size":10}"#,
        )
        .create_async()
        .await;
    server
        .mock("GET", "/api/mail/4")
        .with_status(200)
        .with_body(r#"{"id":4,"to":"bob@hnu.edu.cn","subject":"new","content":"half done","folder":"DRAFT"}"#)
        .create_async()
        .await;
    let send = server
        .mock("POST", "/api/mail/send")
        .match_body(Matcher::PartialJson(serde_json::json!({"draftId": 4})))
        .with_status(200)
        .with_body(ACK)
        .create_async()
        .await;
    let vm = client_for(&server);
    vm.login(Credentials::new("alice", "secret1")).await;

    let draft = vm.load_latest_draft().await.unwrap().into_success().unwrap();
    assert_eq!(draft.id, 4);
    assert!(draft.is_draft());

    let request = hnumail_core::EmailRequest::new(&draft.to, &draft.subject, &draft.content)
        .with_draft_id(Some(draft.id));
    assert!(validation::validate_email_request(&request).is_ok());
    assert!(vm.send_email(request).await.success().is_some());
    send.assert_async().await;
}
