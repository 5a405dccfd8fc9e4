use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use deepoct_auth::flows::seed_users;
use deepoct_auth::jwt::SessionKeys;
use deepoct_gpt::client::{CompletionClient, CompletionRequest};
use deepoct_gpt::error::GptError;
use deepoct_server::build_router;
use deepoct_server::state::AppState;
use deepoct_store::memory::InMemoryStore;
use deepoct_store::seed::default_patients;

const ANALYSIS_REPLY: &str = r#"```json
{
  "left_eye": {
    "dril": {"status": "present", "extent": "focal"},
    "oedeme": {"status": "Présent", "nb_logette": "2", "taille": "Small", "localisation": "fovéolaire"},
    "mle": "partiellement interrompue",
    "ze": "continue",
    "epaisseur_retinienne": "345",
    "briding": "Présent"
  }
}
```"#;

/// Answers analysis requests with `ANALYSIS_REPLY` and narrative requests
/// with two lines.
struct StubClient;

impl CompletionClient for StubClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GptError> {
        if request.max_tokens == 1500 {
            Ok(ANALYSIS_REPLY.to_string())
        } else {
            Ok("Au total:\n\nOD : absence d'oedème.".to_string())
        }
    }
}

fn app_with(client: Option<Arc<dyn CompletionClient>>) -> Router {
    let store = Arc::new(InMemoryStore::new(
        seed_users("password123", "admin123", 1_000),
        default_patients(),
    ));
    let sessions = SessionKeys::new(b"test-secret", 3600);
    build_router(AppState::in_memory(store, sessions, client, "gpt-4o"))
}

fn app() -> Router {
    app_with(Some(Arc::new(StubClient)))
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header("Authorization", format!("Bearer {t}"));
    }
    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn login(app: &Router, identifiant: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/auth/login",
            None,
            Some(json!({ "identifiant": identifiant, "password": password })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let (status, body) = send(&app_with(None), request("GET", "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["vision_model"], false);
}

#[tokio::test]
async fn login_reports_french_messages() {
    let app = app();

    let (status, body) = send(
        &app,
        request("POST", "/auth/login", None, Some(json!({ "identifiant": "Nezar" }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Veuillez saisir un identifiant et un mot de passe.");

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/auth/login",
            None,
            Some(json!({ "identifiant": "Nezar", "password": "wrong" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Identifiant ou mot de passe incorrect.");

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/auth/login",
            None,
            Some(json!({ "identifiant": "elamri_ayoub", "password": "password123" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Connexion réussie !");
    assert_eq!(body["redirect"], "/dashboard");
    assert_eq!(body["user"]["identifiant"], "Elamri_Ayoub");
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let app = app();
    for (method, uri) in [
        ("GET", "/patients"),
        ("GET", "/auth/me"),
        ("POST", "/analysis"),
        ("GET", "/patients/Tazi_Mohammed/analyses/latest"),
    ] {
        let (status, body) = send(&app, request(method, uri, None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["redirect"], "/");
    }

    let (status, _) = send(&app, request("GET", "/patients", Some("not-a-token"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_and_logout() {
    let app = app();
    let token = login(&app, "admin", "admin123").await;

    let (status, body) = send(&app, request("GET", "/auth/me", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");

    let (status, body) = send(&app, request("POST", "/auth/logout", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["redirect"], "/");
}

#[tokio::test]
async fn patients_are_scoped_to_their_doctor() {
    let app = app();
    let owner = login(&app, "Elamri_Ayoub", "password123").await;
    let other = login(&app, "Nezar", "password123").await;

    let (_, body) = send(&app, request("GET", "/patients", Some(&owner), None)).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nom"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Idrissi", "Alaoui", "Tazi", "Benkirane", "El Amrani"]);

    let (_, body) = send(&app, request("GET", "/patients", Some(&other), None)).await;
    assert_eq!(body, json!([]));

    let (status, _) = send(
        &app,
        request("GET", "/patients/Tazi_Mohammed", Some(&other), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_and_update_patient() {
    let app = app();
    let token = login(&app, "Nezar", "password123").await;

    let (status, body) = send(
        &app,
        request("POST", "/patients", Some(&token), Some(json!({ "nom": "Berrada" }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Veuillez remplir tous les champs obligatoires (nom, prénom, âge)."
    );

    let new_patient = json!({
        "nom": "Berrada",
        "prenom": "Sara",
        "age": 54,
        "sexe": "Femme",
        "ivt_recu": "Oui",
        "type_ivt": "anti_vegf",
        "nb_injections": 2,
        "molecule": "Aflibercept"
    });
    let (status, body) = send(
        &app,
        request("POST", "/patients", Some(&token), Some(new_patient.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "Berrada_Sara");
    assert_eq!(body["message"], "Patient Berrada Sara ajouté avec succès !");
    assert_eq!(body["patient"]["doctor"], "Nezar");

    let (status, _) = send(
        &app,
        request("POST", "/patients", Some(&token), Some(new_patient)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        request(
            "PUT",
            "/patients/Berrada_Sara",
            Some(&token),
            Some(json!({ "nom": "Berrada", "prenom": "Sara", "age": 55, "ivt_recu": "Non" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["age"], 55);
    assert_eq!(body["nb_injections"], 0);
    assert_eq!(body["type_ivt"], Value::Null);

    let (status, _) = send(
        &app,
        request(
            "PUT",
            "/patients/Nobody_Here",
            Some(&token),
            Some(json!({ "nom": "A", "prenom": "B", "age": 1 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn analysis_binds_model_reply_to_form() {
    let app = app();
    let token = login(&app, "Elamri_Ayoub", "password123").await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/analysis",
            Some(&token),
            Some(json!({
                "image": "data:image/jpeg;base64,AAAA",
                "clinician": { "left": { "briding": "Absent", "decollement": "Présent" } }
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let left = &body["form"]["left"];
    assert_eq!(left["dril"], "Présente");
    assert_eq!(left["oedeme"], "Présent");
    assert_eq!(left["taille"], "petite");
    assert_eq!(left["mle"], "Partiellement interrompue");
    assert_eq!(left["briding"], "Absent");
    assert_eq!(left["decollement"], "Présent");
    assert_eq!(left["edtrs"], "Central: 345μm");
    assert_eq!(body["form"]["right"]["dril"], "Absente");
    assert_eq!(body["analysis"]["left_eye"]["briding"], "Absent");
    assert_eq!(body["analysis"]["left_eye"]["decollement"], "Présent");
    assert_eq!(body["analysis"]["right_eye"]["briding"], "Absent");
    for field in ["briding", "decollement"] {
        assert_eq!(body["analysis"]["left_eye"][field], body["form"]["left"][field], "{field}");
    }

    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 22);
    assert_eq!(slots[0]["id"], "dril-left");
    assert_eq!(slots[21]["id"], "edtrs-input-right");
}

#[tokio::test]
async fn analysis_without_model_uses_defaults() {
    let app = app_with(None);
    let token = login(&app, "Elamri_Ayoub", "password123").await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/analysis",
            Some(&token),
            Some(json!({ "image": "data:image/jpeg;base64,AAAA" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["form"]["left"]["dril"], "Absente");
    assert_eq!(body["form"]["right"]["mle"], "Continue");

    let (_, body) = send(
        &app,
        request("POST", "/analysis/report", Some(&token), Some(json!({}))),
    )
    .await;
    assert_eq!(body["text"], "Impossible de générer un rapport sans clé API OpenAI.");
}

#[tokio::test]
async fn report_and_plan_return_paragraphs() {
    let app = app();
    let token = login(&app, "Elamri_Ayoub", "password123").await;
    let form = json!({ "left": { "oedeme": "Présent", "edtrs-input": "ignored" } });

    let (status, body) = send(
        &app,
        request("POST", "/analysis/report", Some(&token), Some(json!({ "form": form }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paragraphs"], json!(["Au total:", "OD : absence d'oedème."]));

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/analysis/plan",
            Some(&token),
            Some(json!({
                "form": form,
                "report": ["Au total:", "OD : absence d'oedème."],
                "patient_id": "Tazi_Mohammed"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paragraphs"].as_array().unwrap().len(), 2);

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/analysis/plan",
            Some(&token),
            Some(json!({ "patient_id": "Unknown_Patient" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn saved_analyses_and_latest() {
    let app = app();
    let token = login(&app, "Elamri_Ayoub", "password123").await;
    let uri = "/patients/Tazi_Mohammed/analyses";

    let (status, _) = send(&app, request("GET", &format!("{uri}/latest"), Some(&token), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        request(
            "POST",
            uri,
            Some(&token),
            Some(json!({ "left": { "dril": "Présente", "edtrs": "Central: 301μm" } })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["left_eye"]["dril"]["status"], "Présente");
    assert_eq!(body["data"]["left_eye"]["epaisseur_retinienne"]["central"], "301μm");
    assert_eq!(body["data"]["right_eye"]["mle"], "Continue");

    send(
        &app,
        request("POST", uri, Some(&token), Some(json!({ "right": { "ze": "Partiellement interrompue" } }))),
    )
    .await;

    let (_, body) = send(&app, request("GET", uri, Some(&token), None)).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, request("GET", &format!("{uri}/latest"), Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["right_eye"]["ze"], "Partiellement interrompue");
}

#[tokio::test]
async fn form_layout_and_validation_are_public() {
    let app = app();

    let (status, body) = send(&app, request("GET", "/forms/biomarkers", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sections"].as_array().unwrap().len(), 7);
    assert_eq!(body["eyes"][0]["heading"], "Œil Gauche");

    let (status, body) = send(&app, request("GET", "/forms/biomarkers/kyste", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fields"][1]["shown_when"]["equals"], "Présent");

    let (status, _) = send(&app, request("GET", "/forms/biomarkers/nope", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/forms/validate",
            None,
            Some(json!({ "mle-left": "Intacte", "dril-right": "Présente" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["slot_id"], "mle-left");

    let (status, _) = send(
        &app,
        request("POST", "/forms/validate", None, Some(json!({ "iris-left": "x" }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
