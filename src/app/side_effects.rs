// ==========================================
// 高校数据录入系统 - 宿主副作用实现
// ==========================================
// 剪贴板与外部链接,均为尽力而为
// ==========================================

use crate::importer::{Clipboard, LinkOpener};
use std::error::Error;
use std::process::Command;

/// 无剪贴板环境（命令行/服务端）,调用方收到不可用提示
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), Box<dyn Error>> {
        Err("当前环境没有可用的剪贴板".into())
    }
}

/// 调用系统默认浏览器打开链接
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&mut self, url: &str) -> Result<(), Box<dyn Error>> {
        let mut command = if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", "", url]);
            c
        } else if cfg!(target_os = "macos") {
            let mut c = Command::new("open");
            c.arg(url);
            c
        } else {
            let mut c = Command::new("xdg-open");
            c.arg(url);
            c
        };

        // 不等待浏览器退出
        command.spawn()?;
        Ok(())
    }
}
