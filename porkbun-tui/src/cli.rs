//! 命令行参数
//!
//! 没有子命令，只有 `-h/--help` 和 `-v/--version`；两者都由 clap 打印后以 0 退出。

use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
Configuration:
  Set PORKBUN_API_KEY and PORKBUN_SECRET_KEY, or create
  ~/.config/porkbun-tui/config.yaml with:
    api_key: pk1_xxx
    secret_key: sk1_xxx
  $XDG_CONFIG_HOME/porkbun-tui/config.yaml is used first when it exists.
  Environment variables take precedence over the config file.
  Get your API keys at: https://porkbun.com/account/api

  PORKBUN_TUI_DEMO=1 starts with sample data and no network access.

Keyboard shortcuts:
  j/k, Up/Down   Navigate
  Enter          View details / expand group
  Esc            Back / clear filter
  /              Search domains
  1 / 2          Sort by name / expiration
  d              DNS records
  n              Nameservers
  a              Availability checker
  t              TLD cost breakdown
  c              Expiration calendar
  r              Refresh
  ?              Help
  q, Ctrl+C      Quit

Cached data lives in ~/.cache/porkbun-tui (platform cache directory).";

/// Porkbun TUI - browse and manage your Porkbun domains
#[derive(Parser, Debug)]
#[command(name = "porkbun-tui")]
#[command(version)]
#[command(about = "Terminal UI for managing Porkbun domains", long_about = None)]
#[command(disable_version_flag = true, after_help = AFTER_HELP)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

/// 解析参数；`--help` / `--version` 在这里直接退出
pub fn parse() -> Cli {
    Cli::parse()
}
