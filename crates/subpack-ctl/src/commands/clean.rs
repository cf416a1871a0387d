//! Clean command handler.

use crate::cli_config::CliConfig;
use crate::output;
use crate::CleanArgs;

pub(crate) async fn handle_clean_command(
    args: CleanArgs,
    config: &CliConfig,
) -> subpack::Result<()> {
    let options = subpack::Options {
        cwd: args.cwd,
        input_dir: args.input_dir.or_else(|| config.input_dir.clone()),
        ..subpack::Options::default()
    };

    let modules = subpack::clean(options).await?;
    for module in &modules {
        output::item(module);
    }
    output::success(format!("Cleaned {} proxy packages", modules.len()));
    Ok(())
}
