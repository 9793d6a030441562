//! Template renderer: turns the adapter-shaped view into output files.
//!
//! Each manifest key maps to one embedded askama template. Failure to render
//! a key is reported with that key and aborts the remaining manifest — there
//! is no partial-success continuation.

use crate::adapter::{ClientView, LanguageAdapter};
use crate::error::GenerateError;
use crate::model::ClientModel;
use askama::Template;
use std::fs;
use std::path::Path;

#[derive(Template)]
#[template(path = "package.json.txt", escape = "none")]
struct PackageJsonTemplate<'a> {
    view: &'a ClientView,
}

#[derive(Template)]
#[template(path = "tsconfig.json.txt", escape = "none")]
struct TsconfigTemplate;

#[derive(Template)]
#[template(path = "client.ts.txt", escape = "none")]
struct ClientModuleTemplate<'a> {
    view: &'a ClientView,
}

#[derive(Template)]
#[template(path = "types.ts.txt", escape = "none")]
struct TypesModuleTemplate<'a> {
    view: &'a ClientView,
}

#[derive(Template)]
#[template(path = "index.ts.txt", escape = "none")]
struct IndexModuleTemplate<'a> {
    view: &'a ClientView,
}

#[derive(Template)]
#[template(path = "README.md.txt", escape = "none")]
struct ReadmeTemplate<'a> {
    view: &'a ClientView,
}

/// Render every file in the adapter's manifest into `output_dir`.
///
/// Output path = manifest key, plus the adapter's file extension unless the
/// key already carries a literal one.
pub fn render_manifest(
    adapter: &dyn LanguageAdapter,
    model: &ClientModel,
    output_dir: &Path,
) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir).map_err(|e| GenerateError::Output {
        path: output_dir.to_path_buf(),
        reason: e.to_string(),
    })?;
    let view = adapter.build_view(model);
    for key in adapter.manifest() {
        let rendered = render_key(key, &view)?;
        let file_name = if key.contains('.') {
            (*key).to_string()
        } else {
            format!("{key}.{}", adapter.file_extension())
        };
        let path = output_dir.join(&file_name);
        fs::write(&path, rendered).map_err(|e| GenerateError::Output {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        println!("✅ Generated {}", path.display());
    }
    Ok(())
}

fn render_key(key: &str, view: &ClientView) -> Result<String, GenerateError> {
    let rendered = match key {
        "package.json" => PackageJsonTemplate { view }.render(),
        "tsconfig.json" => TsconfigTemplate.render(),
        "client" => ClientModuleTemplate { view }.render(),
        "types" => TypesModuleTemplate { view }.render(),
        "index" => IndexModuleTemplate { view }.render(),
        "README.md" => ReadmeTemplate { view }.render(),
        other => {
            return Err(GenerateError::Template {
                key: other.to_string(),
                reason: "no registered template".to_string(),
            })
        }
    };
    rendered.map_err(|e| GenerateError::Template {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
