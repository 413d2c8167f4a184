use clap::Parser;
use vrm_expr_excel::cli::{Cli, Commands};
use vrm_expr_excel::error::{ExprExcelError, Result};
use vrm_expr_excel::export;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert { csv_file, output } => {
            println!("📊 vrm-expr-excel - CSV変換\n");

            if !csv_file.exists() {
                return Err(ExprExcelError::FileNotFound(
                    csv_file.display().to_string(),
                ));
            }

            let output_path = export::convert(&csv_file, output.as_deref(), cli.verbose)?;

            println!("\n✅ 変換完了: {}", output_path.display());
        }
    }

    Ok(())
}
