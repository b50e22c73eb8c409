use anyhow::Result;

use linkclip::Config;

use super::{build_client, build_registry};

pub fn cmd_handlers(config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let registry = build_registry(config, &client, false);

    for (i, binding) in registry.bindings().iter().enumerate() {
        println!("{:>2}. {:<12} /{}/", i + 1, binding.handler().name(), binding.pattern());
    }
    println!("    {:<12} (default)", registry.default_handler().name());

    Ok(())
}

pub fn cmd_resolve(url: &str, config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let registry = build_registry(config, &client, false);

    println!("{}", registry.resolve(url).name());
    Ok(())
}
