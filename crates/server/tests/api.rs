use std::net::SocketAddr;

use reqwest::StatusCode;
use serde_json::{json, Value};
use server::{routes, AppState};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(&body).send().await?)
    }

    async fn put(&self, path: &str, body: Value) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.put(self.url(path)).json(&body).send().await?)
    }

    async fn get(&self, path: &str) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    async fn delete(&self, path: &str) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    async fn create_type(&self, name: &str) -> anyhow::Result<Value> {
        let res = self.post("/animal-types", json!({"name": name, "averageLifespan": 12})).await?;
        assert_eq!(res.status(), StatusCode::OK);
        Ok(res.json().await?)
    }

    async fn create_animal(&self, type_id: i64) -> anyhow::Result<Value> {
        let res = self
            .post(
                "/animals",
                json!({
                    "name": " bella ",
                    "age": 4,
                    "breed": " LABRADOR",
                    "gender": "МУЖСКОЙ",
                    "weight": 28.5,
                    "color": "brown ",
                    "animalType": {"id": type_id, "name": "forged"}
                }),
            )
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
        Ok(res.json().await?)
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = routes::build_router(AppState::in_memory(), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(TestApp { base_url: format!("http://{}", addr), client: reqwest::Client::new() })
}

#[tokio::test]
async fn health_and_openapi_are_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.get("/health").await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"status": "ok"}));

    let doc: Value = app.get("/api-docs/openapi.json").await?.json().await?;
    assert!(doc["paths"]["/animals/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn animal_create_normalizes_and_resolves_type() -> anyhow::Result<()> {
    let app = start_server().await?;
    let ty = app.create_type("  dOG").await?;
    assert_eq!(ty["name"], "Dog");
    assert_eq!(ty["averageLifespan"], 12);

    let animal = app.create_animal(ty["id"].as_i64().unwrap_or_default()).await?;
    assert_eq!(animal["name"], "Bella");
    assert_eq!(animal["breed"], "Labrador");
    assert_eq!(animal["color"], "Brown");
    assert_eq!(animal["gender"], "мужской");
    assert_eq!(animal["weight"].as_f64(), Some(28.5));
    // the stored type replaces whatever the client embedded
    assert_eq!(animal["animalType"], ty);

    let id = animal["id"].as_i64().unwrap_or_default();
    let fetched: Value = app.get(&format!("/animals/{}", id)).await?.json().await?;
    assert_eq!(fetched, animal);
    let all: Value = app.get("/animals").await?.json().await?;
    assert_eq!(all.as_array().map(|a| a.len()), Some(1));
    Ok(())
}

#[tokio::test]
async fn animal_with_unknown_type_is_not_found_and_not_stored() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app
        .post(
            "/animals",
            json!({"name": "Rex", "age": 2, "breed": "Pug", "gender": "женский",
                   "weight": 8, "color": "Black", "animalType": {"id": 999}}),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "AnimalType not found: 999");
    let all: Value = app.get("/animals").await?.json().await?;
    assert_eq!(all, json!([]));
    Ok(())
}

#[tokio::test]
async fn field_errors_are_joined_in_one_response() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app
        .post(
            "/animals",
            json!({"name": "R", "age": -1, "breed": "Pug", "weight": 2000,
                   "color": "Black", "animalType": {"id": 1}}),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.text().await?,
        "name: name must be between 2 and 50 characters; age: age must be between 0 and 100; \
         gender: gender is required; weight: weight must be between 0.01 and 1000.00"
    );

    let res = app.post("/animal-types", json!({"name": "   "})).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "name: name is required");

    let res = app
        .client
        .post(app.url("/animal-types"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_ids_answer_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    for (path, msg) in [
        ("/animals/41", "Animal not found: 41"),
        ("/animal-types/42", "AnimalType not found: 42"),
        ("/medical-records/43", "MedicalRecord not found: 43"),
    ] {
        let res = app.get(path).await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{}", path);
        assert_eq!(res.text().await?, msg);
    }
    let res = app.put("/animal-types/42", json!({"name": "Cat"})).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn medical_record_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let ty = app.create_type("cat").await?;
    let type_id = ty["id"].as_i64().unwrap_or_default();
    let first = app.create_animal(type_id).await?;
    let second = app.create_animal(type_id).await?;
    let first_id = first["id"].as_i64().unwrap_or_default();
    let second_id = second["id"].as_i64().unwrap_or_default();

    let res = app
        .post(
            "/medical-records",
            json!({"visitDate": "2024-03-15", "procedureType": " VACCINATION", "diagnosis": "healthy"}),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "Animal ID is required");

    let res = app
        .post(
            "/medical-records",
            json!({"visitDate": "2024-03-15", "procedureType": "x", "diagnosis": "y", "animal": {"id": 999}}),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .post(
            "/medical-records",
            json!({"visitDate": "1999-12-31", "procedureType": "x", "diagnosis": "y", "animal": {"id": first_id}}),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "visit year must be between 2000 and 2100");

    let res = app
        .post(
            "/medical-records",
            json!({"visitDate": "2024-03-15", "procedureType": " VACCINATION", "diagnosis": "healthy",
                   "animal": {"id": first_id}}),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let record: Value = res.json().await?;
    assert_eq!(record["procedureType"], "Vaccination");
    assert_eq!(record["diagnosis"], "Healthy");
    assert_eq!(record["visitDate"], "2024-03-15");
    assert_eq!(record["animal"], first);
    let record_id = record["id"].as_i64().unwrap_or_default();

    // the owning animal never changes on update
    let res = app
        .put(
            &format!("/medical-records/{}", record_id),
            json!({"visitDate": "2024-04-01", "procedureType": "checkup", "diagnosis": "otitis",
                   "animal": {"id": second_id}}),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["animal"]["id"].as_i64(), Some(first_id));
    assert_eq!(updated["diagnosis"], "Otitis");

    let of_first: Value = app.get(&format!("/medical-records/by-animal/{}", first_id)).await?.json().await?;
    assert_eq!(of_first.as_array().map(|a| a.len()), Some(1));
    let of_second: Value = app.get(&format!("/medical-records/by-animal/{}", second_id)).await?.json().await?;
    assert_eq!(of_second, json!([]));

    // dependents block deletes up the chain
    let res = app.delete(&format!("/animals/{}", first_id)).await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let res = app.delete(&format!("/animal-types/{}", type_id)).await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = app.delete(&format!("/medical-records/{}", record_id)).await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    for id in [first_id, second_id] {
        let res = app.delete(&format!("/animals/{}", id)).await?;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }
    let res = app.delete(&format!("/animal-types/{}", type_id)).await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // absent ids are a no-op
    let res = app.delete("/animal-types/12345").await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn animal_update_replaces_fields() -> anyhow::Result<()> {
    let app = start_server().await?;
    let dog = app.create_type("dog").await?;
    let cat = app.create_type("cat").await?;
    let animal = app.create_animal(dog["id"].as_i64().unwrap_or_default()).await?;
    let id = animal["id"].as_i64().unwrap_or_default();

    let res = app
        .put(
            &format!("/animals/{}", id),
            json!({"name": "max", "age": 5, "breed": "mixed", "gender": "женский",
                   "weight": 4.25, "color": "GREY", "animalType": {"id": cat["id"]}}),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["name"], "Max");
    assert_eq!(updated["gender"], "женский");
    assert_eq!(updated["color"], "Grey");
    assert_eq!(updated["animalType"], cat);

    let res = app
        .put(
            "/animals/999",
            json!({"name": "max", "age": 5, "breed": "mixed", "gender": "женский",
                   "weight": 4.25, "color": "GREY", "animalType": {"id": cat["id"]}}),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn medical_record_update_checks_fields() -> anyhow::Result<()> {
    let app = start_server().await?;
    let ty = app.create_type("dog").await?;
    let animal = app.create_animal(ty["id"].as_i64().unwrap_or_default()).await?;
    let res = app
        .post(
            "/medical-records",
            json!({"visitDate": "2024-03-15", "procedureType": "checkup", "diagnosis": "healthy",
                   "animal": {"id": animal["id"]}}),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let record: Value = res.json().await?;
    let path = format!("/medical-records/{}", record["id"].as_i64().unwrap_or_default());

    let res = app
        .put(&path, json!({"visitDate": "2099-01-01", "procedureType": "p".repeat(101), "diagnosis": "y"}))
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.text().await?,
        "visitDate: visit date cannot be in the future; procedureType: procedureType must be at most 100 characters"
    );

    let res = app
        .put(&path, json!({"visitDate": "2024-03-16", "procedureType": "x", "diagnosis": "d".repeat(501)}))
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // nothing from the rejected bodies was stored
    let stored: Value = app.get(&path).await?.json().await?;
    assert_eq!(stored, record);
    Ok(())
}
