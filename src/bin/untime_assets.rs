//! Writes `manifest.json` and the `sw.js` service worker for a deployment.
//!
//! Usage: untime-assets [--production | --base <path>] [--out dist]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use untime::pwa::cache::DEPLOY_SEGMENT;
use untime::pwa::{AppManifest, Precache};

fn write_asset(dir: &Path, name: &str, body: &str) -> anyhow::Result<()> {
    let path = dir.join(name);
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut args = pico_args::Arguments::from_env();
    let production = args.contains("--production");
    let base: String = args
        .opt_value_from_str("--base")
        .context("parsing --base")?
        .unwrap_or_else(|| {
            if production {
                DEPLOY_SEGMENT.to_string()
            } else {
                String::new()
            }
        });
    let out: PathBuf = args
        .opt_value_from_str("--out")
        .context("parsing --out")?
        .unwrap_or_else(|| PathBuf::from("dist"));
    let rest = args.finish();
    if !rest.is_empty() {
        anyhow::bail!("unexpected arguments: {:?}", rest);
    }

    fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;

    let manifest = AppManifest::untime(&base)
        .to_json_pretty()
        .context("serializing manifest")?;
    write_asset(&out, "manifest.json", &manifest)?;

    let worker = Precache::for_base(&base)
        .service_worker_js()
        .context("rendering service worker")?;
    write_asset(&out, "sw.js", &worker)?;
    Ok(())
}
