use dialoguer::Input;
use std::io;

use crate::action::cli::print_outcome;
use crate::config::config::OutputFormat;
use crate::config::ports::{ConfigPort, ConversionPort};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;
use crate::utils::report::{render_empty, render_header};
use crate::utils::utils::setup_logging;

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

pub fn process_interactive_mode() -> io::Result<String> {
    // 互動模式只顯示警告以上的日誌，避免干擾進度列
    setup_logging("warn")?;

    loop {
        println!("{}", render_header());
        let format = match ask_output_format()? {
            Some(format) => format,
            None => break,
        };

        let config_port: Box<dyn ConfigPort> = Box::new(DefaultConfigAdapter::new(
            DEFAULT_INPUT_DIR.to_string(),
            DEFAULT_OUTPUT_DIR.to_string(),
            format,
        ));
        let config = ConfigService::new(config_port).get_config()?;

        let output = ConversionAdapter.execute(config.clone())?;
        if output.discovered == 0 {
            println!("{}", render_empty(&config.input));
            if ask_continue("按 Enter 返回，或輸入 Q 結束")? {
                continue;
            }
            break;
        }

        print_outcome(&output, config.format);

        println!("\n準備進行下一次轉換。");
        if !ask_continue("按 Enter 重新開始，或輸入 Q 結束")? {
            break;
        }
    }

    println!("\n結束程式...");
    Ok(DEFAULT_OUTPUT_DIR.to_string())
}

/// 詢問輸出格式；使用者輸入 q 或 quit 時返回 None
pub fn ask_output_format() -> io::Result<Option<OutputFormat>> {
    let answer = prompt_line(&format!("1. {}", OutputFormat::Png.label()))?;
    if is_quit(&answer) {
        return Ok(None);
    }
    Ok(Some(OutputFormat::Png))
}

/// 返回 true 表示繼續，false 表示結束
pub fn ask_continue(prompt: &str) -> io::Result<bool> {
    let answer = prompt_line(prompt)?;
    Ok(!is_quit(&answer))
}

pub fn prompt_line(prompt: &str) -> io::Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("輸入失敗: {}", e)))
}

pub fn is_quit(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "q" | "quit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_quit_answers() {
        assert!(is_quit("q"));
        assert!(is_quit(" Q "));
        assert!(is_quit("QUIT"));
        assert!(!is_quit(""));
        assert!(!is_quit("1"));
        assert!(!is_quit("png"));
    }
}
