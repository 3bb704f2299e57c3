//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{Duration, Utc};
use equipments::prelude::*;

pub const API: &str = "/apis/api.plugin.halo.run/v1alpha1/plugins/PluginEquipments";

/// Stores behind a test server, shared with the router
#[derive(Clone)]
pub struct Catalogue {
    pub groups: InMemoryExtensionStore<EquipmentGroup>,
    pub equipments: InMemoryExtensionStore<Equipment>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self {
            groups: InMemoryExtensionStore::new(),
            equipments: InMemoryExtensionStore::new(),
        }
    }

    pub async fn group(&self, name: &str, priority: Option<i32>) -> EquipmentGroup {
        self.groups
            .create(EquipmentGroup::new(
                Metadata::named(name),
                EquipmentGroupSpec {
                    display_name: name.to_uppercase(),
                    priority,
                },
            ))
            .await
            .expect("group should be created")
    }

    pub async fn equipment(&self, item: Item<'_>) -> Equipment {
        let mut metadata =
            Metadata::created_at(item.name, Utc::now() - Duration::minutes(item.minutes_ago));
        for (key, value) in item.labels {
            metadata = metadata.with_label(*key, *value);
        }
        if item.deleted {
            metadata.deletion_timestamp = Some(Utc::now());
        }

        let mut spec = EquipmentSpec::new("", "https://example.com", item.group);
        spec.display_name = item.display_name.map(str::to_string);
        spec.priority = item.priority;

        self.equipments
            .create(Equipment::new(metadata, spec))
            .await
            .expect("equipment should be created")
    }
}

/// Description of one equipment record to insert
#[derive(Clone, Copy)]
pub struct Item<'a> {
    pub name: &'a str,
    pub display_name: Option<&'a str>,
    pub group: &'a str,
    pub minutes_ago: i64,
    pub priority: Option<i32>,
    pub deleted: bool,
    pub labels: &'a [(&'a str, &'a str)],
}

impl<'a> Item<'a> {
    pub fn new(name: &'a str, display_name: &'a str, group: &'a str) -> Self {
        Self {
            name,
            display_name: Some(display_name),
            group,
            minutes_ago: 0,
            priority: None,
            deleted: false,
            labels: &[],
        }
    }

    pub fn created(mut self, minutes_ago: i64) -> Self {
        self.minutes_ago = minutes_ago;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn unnamed(mut self) -> Self {
        self.display_name = None;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub fn labels(mut self, labels: &'a [(&'a str, &'a str)]) -> Self {
        self.labels = labels;
        self
    }
}

/// Test server over a fresh catalogue with the default configuration
pub fn create_test_server() -> (TestServer, Catalogue) {
    create_test_server_with(PluginConfig::default())
}

/// Test server over a fresh catalogue with the given configuration
pub fn create_test_server_with(config: PluginConfig) -> (TestServer, Catalogue) {
    let catalogue = Catalogue::new();

    let app = ServerBuilder::new()
        .with_config(config)
        .with_group_store(catalogue.groups.clone())
        .with_equipment_store(catalogue.equipments.clone())
        .build()
        .expect("Failed to build app");

    let server = TestServer::try_new(app).expect("Failed to create test server");
    (server, catalogue)
}

/// Names of the items of a JSON list result
pub fn item_names(body: &serde_json::Value) -> Vec<String> {
    body["items"]
        .as_array()
        .expect("items should be an array")
        .iter()
        .map(|item| item["metadata"]["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
