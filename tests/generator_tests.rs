use clientgen::{generate_client, GenerateOptions};
use std::fs;

const SPEC: &str = r##"{
  "info": {"title": "Demo API", "description": "A demo API", "version": "1.2.3"},
  "servers": [{"url": "https://api.example.com"}],
  "paths": {
    "/pets": {
      "get": {
        "operationId": "list_pets",
        "summary": "List pets",
        "responses": {
          "200": {
            "content": {
              "application/json": {
                "schema": {"type": "array", "items": {"$ref": "#/components/schemas/Pet"}}
              }
            }
          }
        }
      },
      "post": {
        "operationId": "add_pet",
        "requestBody": {
          "required": true,
          "content": {
            "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}
          }
        },
        "responses": {
          "201": {
            "content": {
              "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}
            }
          }
        }
      }
    },
    "/pets/{id}": {
      "get": {
        "operationId": "get_pet",
        "parameters": [
          {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}},
          {"name": "verbose", "in": "query", "schema": {"type": "boolean"}}
        ],
        "responses": {
          "200": {
            "content": {
              "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}
            }
          }
        }
      }
    }
  },
  "components": {
    "schemas": {
      "Pet": {
        "type": "object",
        "properties": {
          "id": {"type": "integer"},
          "name": {"type": "string"},
          "status": {"type": "string", "enum": ["available", "sold"]}
        },
        "required": ["id", "name"]
      },
      "PetList": {"type": "array", "items": {"$ref": "#/components/schemas/Pet"}}
    }
  }
}"##;

fn generate_into_temp() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = dir.path().join("openapi.json");
    fs::write(&spec_path, SPEC).unwrap();
    let output = dir.path().join("client");
    generate_client(&GenerateOptions {
        spec_source: spec_path.to_string_lossy().into_owned(),
        project_name: "Demo".to_string(),
        output_dir: output.clone(),
        language: "typescript".to_string(),
    })
    .unwrap();
    (dir, output)
}

#[test]
fn manifest_produces_the_fixed_file_set() {
    let (_dir, output) = generate_into_temp();
    for file in [
        "package.json",
        "tsconfig.json",
        "client.ts",
        "types.ts",
        "index.ts",
        "README.md",
    ] {
        assert!(output.join(file).exists(), "missing {file}");
    }
}

#[test]
fn client_module_contains_formatted_methods_and_paths() {
    let (_dir, output) = generate_into_temp();
    let client = fs::read_to_string(output.join("client.ts")).unwrap();
    assert!(client.contains("export class DemoClient"));
    assert!(client.contains("public async listPets(): Promise<Pet[]>"));
    assert!(client.contains("public async addPet(data: Pet): Promise<Pet>"));
    assert!(client.contains("public async getPet(id: number, verbose?: boolean): Promise<Pet>"));
    assert!(client.contains("url: `/pets/${id}`"));
    assert!(client.contains("params: { verbose }"));
}

#[test]
fn types_module_contains_interfaces_and_aliases() {
    let (_dir, output) = generate_into_temp();
    let types = fs::read_to_string(output.join("types.ts")).unwrap();
    assert!(types.contains("export interface Pet {"));
    assert!(types.contains("id: number;"));
    assert!(types.contains("status?: 'available' | 'sold';"));
    assert!(types.contains("export type PetList = Pet[];"));
}

#[test]
fn package_manifest_uses_lowercased_project_name_and_spec_version() {
    let (_dir, output) = generate_into_temp();
    let package = fs::read_to_string(output.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"demo-client\""));
    assert!(package.contains("\"version\": \"1.2.3\""));
    assert!(package.contains("\"description\": \"A demo API\""));
}

#[test]
fn readme_advertises_the_base_url() {
    let (_dir, output) = generate_into_temp();
    let readme = fs::read_to_string(output.join("README.md")).unwrap();
    assert!(readme.contains("# Demo Client"));
    assert!(readme.contains("baseURL: 'https://api.example.com'"));
}

#[test]
fn index_module_reexports_client_and_types() {
    let (_dir, output) = generate_into_temp();
    let index = fs::read_to_string(output.join("index.ts")).unwrap();
    assert!(index.contains("export { DemoClient } from './client';"));
    assert!(index.contains("export * from './types';"));
}

#[test]
fn unsupported_language_fails_before_reading_the_spec() {
    let err = generate_client(&GenerateOptions {
        spec_source: "/does/not/matter.json".to_string(),
        project_name: "Demo".to_string(),
        output_dir: "/tmp/unused".into(),
        language: "cobol".to_string(),
    })
    .unwrap_err();
    assert!(err.to_string().contains("unsupported target language: cobol"));
}

#[test]
fn generation_is_reproducible_byte_for_byte() {
    let (_dir_a, output_a) = generate_into_temp();
    let (_dir_b, output_b) = generate_into_temp();
    for file in ["client.ts", "types.ts", "package.json"] {
        let a = fs::read_to_string(output_a.join(file)).unwrap();
        let b = fs::read_to_string(output_b.join(file)).unwrap();
        assert_eq!(a, b, "nondeterministic output in {file}");
    }
}
