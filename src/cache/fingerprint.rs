// ABOUTME: Content fingerprint of the project fields that affect the structure preview
// ABOUTME: SHA-256 over a canonical JSON encoding of the selected fields

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::models::ProjectConfig;

/// Only these fields feed the hash. Description, per-app options and the
/// cloud provider do not change the rendered tree and are left out.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FingerprintInput<'a> {
    name: &'a str,
    architecture: &'static str,
    applications: Vec<AppInput<'a>>,
    infrastructure: InfraInput,
    ci_pipeline: CiInput,
}

#[derive(Serialize)]
struct AppInput<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfraInput {
    docker: bool,
    docker_compose: bool,
    pulumi: bool,
    terraform: bool,
}

#[derive(Serialize)]
struct CiInput {
    provider: &'static str,
    features: Vec<&'static str>,
}

pub fn project_fingerprint(project: &ProjectConfig) -> String {
    let input = FingerprintInput {
        name: &project.name,
        architecture: project.architecture.key(),
        applications: project
            .applications
            .iter()
            .map(|app| AppInput {
                kind: app.kind.key(),
                name: &app.name,
            })
            .collect(),
        infrastructure: InfraInput {
            docker: project.infrastructure.docker,
            docker_compose: project.infrastructure.docker_compose,
            pulumi: project.infrastructure.pulumi,
            terraform: project.infrastructure.terraform,
        },
        ci_pipeline: CiInput {
            provider: project.ci_pipeline.provider_key(),
            features: project.ci_pipeline.features.iter().map(|f| f.key()).collect(),
        },
    };

    // Serializing plain strings and bools cannot fail
    let bytes = serde_json::to_vec(&input).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    to_hex(&hasher.finalize())
}

fn to_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
