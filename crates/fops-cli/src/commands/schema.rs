use fops_core::schema::ContractSchemas;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `fops schema [type]`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schemas = ContractSchemas::new();
    let Some(name) = args.type_name.as_deref() else {
        return output(&schemas.names(), flags.format);
    };

    match schemas.get(name) {
        Some(schema) => output(schema, flags.format),
        None => anyhow::bail!(
            "unknown schema '{name}'; available: {}",
            schemas.names().join(", ")
        ),
    }
}
