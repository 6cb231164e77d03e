// コンソールエントリポイント - 組み込みレベル/JSONレベルを解いて手順を表示する

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bubblast::levels::{builtin_levels, LevelSpec};
use bubblast::{logging, solve, GameState, Move};

#[derive(Parser, Debug)]
#[command(name = "bubblast", about = "Bubble Blast レベルの全探索ソルバー")]
struct Args {
    /// JSON形式のレベルファイル（省略時は組み込みレベルを解く）
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// 手順をJSONで出力する（時系列順）
    #[arg(long)]
    json: bool,

    /// 詳細ログを有効化
    #[arg(short, long)]
    verbose: bool,

    /// 詳細ログの出力先ファイル
    #[arg(long, default_value = "bubblast.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logging::init_log_file(&args.log_file)
            .with_context(|| format!("ログファイルを開けません: {}", args.log_file.display()))?;
        logging::set_verbose(true);
    }

    match &args.level {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("レベルファイルを開けません: {}", path.display()))?;
            let spec: LevelSpec = serde_json::from_reader(BufReader::new(file))
                .context("レベルファイルの形式が不正です")?;
            let state = spec.into_state()?;
            report(&path.display().to_string(), &state, args.json)?;
        }
        None => {
            for (name, cells, moves) in builtin_levels() {
                let state = GameState::with_default_size(cells, moves)?;
                report(name, &state, args.json)?;
            }
        }
    }
    Ok(())
}

/// レベルを解いて結果を表示する。手順は時系列順（最初の手が0番）。
fn report(name: &str, state: &GameState, json: bool) -> Result<()> {
    println!("レベル {} を解析中 ({}手以内)", name, state.moves_left());
    match solve(state)? {
        None => println!("=> 解なし"),
        Some(moves) => {
            // solve は逆順で返すため、表示前に時系列順へ戻す
            let chronological: Vec<Move> = moves.iter().rev().copied().collect();
            if json {
                println!("{}", serde_json::to_string(&chronological)?);
            } else {
                println!("=> 手順 (0-based):");
                for (i, mv) in chronological.iter().enumerate() {
                    println!("{}: {}", i, mv);
                }
            }
        }
    }
    Ok(())
}
