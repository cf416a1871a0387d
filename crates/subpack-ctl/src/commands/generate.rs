//! Generate command handler.

use crate::cli_config::CliConfig;
use crate::output;
use crate::GenerateArgs;

pub(crate) async fn handle_generate_command(
    args: GenerateArgs,
    config: &CliConfig,
) -> subpack::Result<()> {
    let options = subpack::Options {
        cwd: args.cwd,
        input_dir: args.input_dir.or_else(|| config.input_dir.clone()),
        cjs_dir: args.cjs_dir.or_else(|| config.cjs_dir.clone()),
        es_dir: args.es_dir.or_else(|| config.es_dir.clone()),
        types_dir: args.types_dir.or_else(|| config.types_dir.clone()),
    };

    let modules = subpack::generate(options).await?;
    for module in &modules {
        output::item(module);
    }
    output::success(format!("Generated {} proxy packages", modules.len()));
    Ok(())
}
