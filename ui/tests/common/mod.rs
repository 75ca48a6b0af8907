use std::time::Duration;

use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MEMBERS_PATH: &str = "/members.json";

pub struct TestCtx<'a> {
    /// Keeps the endpoint alive, and verifies `expect` counts on drop.
    _mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    /// App whose members endpoint answers with `members`.
    pub async fn with_members(members: serde_json::Value) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(members)).await
    }

    pub async fn with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(MEMBERS_PATH))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = State::test(format!("{}{MEMBERS_PATH}", mock_server.uri()));
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }

    /// Steps frames until the members request has settled.
    pub async fn settle(&mut self) {
        for _ in 0..50 {
            self.harness.step();
            if !self.harness.state().state().members.loader.status().is_pending() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        // One more pass so the frame renders the settled rows.
        for _ in 0..3 {
            self.harness.step();
        }
    }
}

pub fn member(id: &str, name: &str, email: &str, role: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "name": name, "email": email, "role": role })
}

#[allow(unused)]
pub fn numbered_members(count: usize) -> serde_json::Value {
    let members = (1..=count)
        .map(|i| {
            member(
                &i.to_string(),
                &format!("Member {i:02}"),
                &format!("member{i}@example.com"),
                if i % 5 == 0 { "admin" } else { "member" },
            )
        })
        .collect();
    serde_json::Value::Array(members)
}
