//! Full guest + dashboard lifecycle against the live mock server.
//!
//! Starts the mock server on a random port, then drives both facades over
//! real HTTP through `UreqTransport`, covering creation, listing, the
//! POST-as-PUT updates, query-parameter deletes, and the auth and not-found
//! error paths.

use mock_server::Keys;
use wedding_client::{
    ApiError, Confirmation, DashboardClient, ErrorKind, GuestClient, Present, StatusPolicy,
};

const GUEST_KEY: &str = "guest-secret";
const DASHBOARD_KEY: &str = "dashboard-secret";
const STAGE: &str = "test";

/// Start the mock server on a random port and return the base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            let keys = Keys {
                guest: GUEST_KEY.to_string(),
                dashboard: DASHBOARD_KEY.to_string(),
            };
            mock_server::run(listener, keys).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn new_present(title: &str) -> Present {
    Present {
        present_id: None,
        present_title: title.to_string(),
        img_url: "https://img.example.test/p.jpg".to_string(),
        product_url: "https://shop.example.test/p".to_string(),
        bought: false,
    }
}

#[test]
fn guest_and_dashboard_lifecycle() {
    let base = start_server();
    let guest = GuestClient::new(&base, STAGE, GUEST_KEY);
    let dashboard = DashboardClient::new(&base, STAGE, DASHBOARD_KEY);

    // Registry starts empty.
    let presents = guest.get_presents().unwrap();
    assert!(presents.is_empty());

    // Dashboard adds a present; the id comes back from the snake_case echo.
    let id = dashboard.create_present(&new_present("Toaster")).unwrap();
    assert!(!id.is_empty());

    // Guest sees it, unbought.
    let presents = guest.get_presents().unwrap();
    assert_eq!(presents.len(), 1);
    assert_eq!(presents[0].present_id.as_deref(), Some(id.as_str()));
    assert!(!presents[0].bought);

    // Guest marks it bought (POST-as-PUT, lenient by default).
    let mut bought = presents[0].clone();
    bought.bought = true;
    guest.update_present(&bought).unwrap();

    let presents = guest.get_presents().unwrap();
    assert!(presents[0].bought);

    // Guest RSVPs.
    let rsvp = Confirmation {
        confirmation_id: None,
        name: "Ada".to_string(),
        surname: "Lovelace".to_string(),
        attending: true,
        eating: "meat".to_string(),
        allergies: "nuts".to_string(),
        textfield: "looking forward to it".to_string(),
    };
    let confirmation_id = guest.create_confirmation(&rsvp).unwrap();
    assert!(!confirmation_id.is_empty());

    // Dashboard sees the RSVP and edits the meal choice.
    let confirmations = dashboard.get_confirmations().unwrap();
    assert_eq!(confirmations.len(), 1);
    assert_eq!(confirmations[0].name, "Ada");

    let mut edited = confirmations[0].clone();
    edited.eating = "vegetarian".to_string();
    dashboard.update_confirmation(&edited).unwrap();

    let confirmations = dashboard.get_confirmations().unwrap();
    assert_eq!(confirmations[0].eating, "vegetarian");

    // Dashboard cleans up both records.
    dashboard.delete_confirmation(&confirmation_id).unwrap();
    assert!(dashboard.get_confirmations().unwrap().is_empty());

    dashboard.delete_present(&id).unwrap();
    assert!(guest.get_presents().unwrap().is_empty());

    // Deleting again is NotFound.
    let err = dashboard.delete_present(&id).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Status {
            kind: ErrorKind::NotFound,
            status: 404,
            ..
        }
    ));
}

#[test]
fn wrong_secret_is_unauthorized_with_message() {
    let base = start_server();
    let guest = GuestClient::new(&base, STAGE, "wrong-secret");

    let err = guest.get_presents().unwrap_err();
    match err {
        ApiError::Status {
            kind: ErrorKind::Unauthorized,
            status,
            message,
        } => {
            assert_eq!(status, 401);
            assert_eq!(message.as_deref(), Some("Unauthorized"));
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn update_policy_controls_failure_visibility() {
    let base = start_server();

    // Updating a present that was never created: the server answers 404.
    let mut ghost = new_present("Ghost");
    ghost.present_id = Some("does-not-exist".to_string());

    // Lenient (default) swallows the failure.
    let lenient = GuestClient::new(&base, STAGE, GUEST_KEY);
    assert!(lenient.update_present(&ghost).is_ok());

    // Strict surfaces it.
    let strict = GuestClient::new(&base, STAGE, GUEST_KEY).status_policy(StatusPolicy::Strict);
    let err = strict.update_present(&ghost).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Status {
            kind: ErrorKind::NotFound,
            ..
        }
    ));
}
