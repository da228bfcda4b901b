//! The interactive menu loop.
//!
//! ```text
//! MenuDisplayed --1/2--> Collecting --fields read--> Executing --> MenuDisplayed
//! MenuDisplayed --3/4--> Executing
//! MenuDisplayed --5 or end of input--> Terminated
//! ```
//!
//! The screen is cleared before every menu and every prompt. The output of
//! the last action is kept and shown above the next menu.

use super::print::write_result;
use colored::Colorize;
use console::Term;
use roomstash::api::InventoryApi;
use roomstash::error::Result;
use roomstash::store::DataStore;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const MENU: &str = "\n请选择操作：\n1. 添加物品\n2. 查找物品\n3. 查看统计信息\n4. 清空数据\n5. 退出";
pub const INTERRUPTED: &str = "\n程序已中断。";
const GOODBYE: &str = "退出程序。";
const INVALID_CHOICE: &str = "无效选项，请重新选择。";

/// An output that can also wipe what is currently displayed.
pub trait Screen: Write {
    fn clear(&mut self) -> io::Result<()>;
}

/// The real terminal. Clearing is skipped when disabled or not a tty.
pub struct TermScreen {
    term: Term,
    clear: bool,
}

impl TermScreen {
    pub fn stdout(clear: bool) -> Self {
        Self {
            term: Term::stdout(),
            clear,
        }
    }
}

impl Write for TermScreen {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.term.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.term.flush()
    }
}

impl Screen for TermScreen {
    fn clear(&mut self) -> io::Result<()> {
        if self.clear {
            self.term.clear_screen()
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Find,
    Stats,
    Clear,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Find),
            "3" => Ok(MenuChoice::Stats),
            "4" => Ok(MenuChoice::Clear),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

/// Menu entries that need more input before they can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Add,
    Find,
}

#[derive(Debug)]
enum Request {
    Add {
        room: String,
        storage: String,
        items: String,
    },
    Find {
        term: String,
    },
    Stats,
    Clear,
}

#[derive(Debug)]
enum State {
    MenuDisplayed,
    Collecting(Form),
    Executing(Request),
    Terminated,
}

pub struct Shell<S: DataStore, R: BufRead, O: Screen> {
    api: InventoryApi<S>,
    input: R,
    out: O,
    last_output: Vec<u8>,
}

impl<S: DataStore, R: BufRead, O: Screen> Shell<S, R, O> {
    pub fn new(api: InventoryApi<S>, input: R, out: O) -> Self {
        Self {
            api,
            input,
            out,
            last_output: Vec::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut state = State::MenuDisplayed;
        loop {
            state = match state {
                State::MenuDisplayed => self.show_menu()?,
                State::Collecting(form) => self.collect(form)?,
                State::Executing(request) => self.execute(request)?,
                State::Terminated => return Ok(()),
            };
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (InventoryApi<S>, O) {
        (self.api, self.out)
    }

    fn show_menu(&mut self) -> Result<State> {
        self.out.clear()?;
        let last = std::mem::take(&mut self.last_output);
        self.out.write_all(&last)?;
        writeln!(self.out, "{}", MENU)?;

        let Some(line) = self.prompt("请输入选项编号：")? else {
            return self.end_of_input();
        };

        let next = match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Add) => State::Collecting(Form::Add),
            Ok(MenuChoice::Find) => State::Collecting(Form::Find),
            Ok(MenuChoice::Stats) => State::Executing(Request::Stats),
            Ok(MenuChoice::Clear) => State::Executing(Request::Clear),
            Ok(MenuChoice::Exit) => {
                self.out.clear()?;
                writeln!(self.out, "{}", GOODBYE)?;
                State::Terminated
            }
            Err(()) => {
                writeln!(self.last_output, "{}", INVALID_CHOICE.red())?;
                State::MenuDisplayed
            }
        };
        Ok(next)
    }

    fn collect(&mut self, form: Form) -> Result<State> {
        self.out.clear()?;
        let request = match form {
            Form::Add => {
                let Some(room) = self.prompt("请输入房间名称：")? else {
                    return self.end_of_input();
                };
                let Some(storage) = self.prompt("请输入存储地点：")? else {
                    return self.end_of_input();
                };
                let Some(items) = self.prompt("请输入物品（用分号隔开）：")? else {
                    return self.end_of_input();
                };
                Request::Add {
                    room,
                    storage,
                    items,
                }
            }
            Form::Find => {
                let Some(term) = self.prompt("请输入要查找的物品名称：")? else {
                    return self.end_of_input();
                };
                Request::Find { term }
            }
        };
        Ok(State::Executing(request))
    }

    fn execute(&mut self, request: Request) -> Result<State> {
        let result = match request {
            Request::Add {
                room,
                storage,
                items,
            } => self.api.add_items(&room, &storage, &items)?,
            Request::Find { term } => self.api.find_items(&term)?,
            Request::Stats => self.api.statistics()?,
            Request::Clear => self.api.clear()?,
        };
        write_result(&mut self.last_output, &result)?;
        Ok(State::MenuDisplayed)
    }

    fn end_of_input(&mut self) -> Result<State> {
        self.out.clear()?;
        writeln!(self.out, "{}", INTERRUPTED)?;
        Ok(State::Terminated)
    }

    /// Read one line, without its line ending. `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomstash::config::InventoryConfig;
    use roomstash::store::memory::InMemoryStore;
    use std::io::Cursor;

    const CLEAR_MARK: &str = "<clear>\n";

    #[derive(Default)]
    struct Recorder {
        buf: Vec<u8>,
    }

    impl Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buf.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Screen for Recorder {
        fn clear(&mut self) -> io::Result<()> {
            self.buf.extend_from_slice(CLEAR_MARK.as_bytes());
            Ok(())
        }
    }

    fn run_session(store: InMemoryStore, input: &str) -> (InMemoryStore, String) {
        colored::control::set_override(false);
        let api = InventoryApi::new(store, &InventoryConfig::default());
        let mut shell = Shell::new(api, Cursor::new(input.to_string()), Recorder::default());
        shell.run().unwrap();
        let (api, out) = shell.into_parts();
        (api.into_store(), String::from_utf8(out.buf).unwrap())
    }

    /// Text shown after the final clear, i.e. what the user is looking at.
    fn last_screen(output: &str) -> &str {
        output.rsplit(CLEAR_MARK).next().unwrap()
    }

    #[test]
    fn menu_choice_parsing() {
        assert_eq!("1".parse(), Ok(MenuChoice::Add));
        assert_eq!(" 5\n".parse(), Ok(MenuChoice::Exit));
        assert!("6".parse::<MenuChoice>().is_err());
        assert!("add".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn stats_and_clear_skip_the_input_screen() {
        let (_, out) = run_session(InMemoryStore::new(), "3\n4\n5\n");
        assert!(!out.contains("请输入房间名称："));
        assert!(!out.contains("请输入要查找的物品名称："));
        assert!(out.contains("数据已成功清空！\n"));
    }

    #[test]
    fn find_asks_only_for_the_term() {
        let (_, out) = run_session(InMemoryStore::new(), "2\n碗\n5\n");
        assert!(out.contains(&format!("{}请输入要查找的物品名称：", CLEAR_MARK)));
        assert!(!out.contains("请输入房间名称："));
        assert!(out.contains("未找到任何匹配的物品。\n"));
    }

    #[test]
    fn exit_says_goodbye() {
        let (_, out) = run_session(InMemoryStore::new(), "5\n");
        assert_eq!(last_screen(&out), "退出程序。\n");
    }

    #[test]
    fn end_of_input_shuts_down_cleanly() {
        let (_, out) = run_session(InMemoryStore::new(), "");
        assert_eq!(last_screen(&out), "\n程序已中断。\n");
    }

    #[test]
    fn end_of_input_mid_add_writes_nothing() {
        let (store, out) = run_session(InMemoryStore::new(), "1\n厨房\n");
        assert_eq!(last_screen(&out), "\n程序已中断。\n");
        assert_eq!(store.contents(), None);
    }

    #[test]
    fn invalid_choice_is_reported_above_menu() {
        let (_, out) = run_session(InMemoryStore::new(), "9\n5\n");
        assert!(out.contains(&format!("{}无效选项，请重新选择。\n{}", CLEAR_MARK, MENU)));
    }

    #[test]
    fn add_then_find_then_stats() {
        let input = "1\n厨房\n橱柜\n盘子;碗;筷子\n2\n碗\n3\n5\n";
        let (mut store, out) = run_session(InMemoryStore::new(), input);

        assert!(out.contains("请输入房间名称：请输入存储地点：请输入物品（用分号隔开）："));
        assert!(out.contains("物品已成功添加！\n"));
        assert!(out.contains("房间: 厨房  存储地点: 橱柜  物品: 碗\n"));
        assert!(out.contains("房间总数: 1\n物品总数: 3\n"));

        let inv = store.load().unwrap().inventory;
        assert_eq!(inv.stats().items, 3);
    }

    #[test]
    fn result_stays_visible_until_next_action() {
        let (_, out) = run_session(InMemoryStore::new(), "3\n5\n");
        let screens: Vec<&str> = out.split(CLEAR_MARK).collect();
        let after_stats = screens[screens.len() - 2];
        assert!(after_stats.starts_with("当前没有任何数据。\n"));
        assert!(after_stats.contains(MENU));
    }

    #[test]
    fn clear_wipes_the_store() {
        let store = InMemoryStore::with_contents(r#"{"厨房": {"橱柜": ["碗"]}}"#);
        let (store, out) = run_session(store, "4\n3\n5\n");
        assert!(out.contains("数据已成功清空！\n"));
        assert!(out.contains("当前没有任何数据。\n"));
        assert_eq!(store.contents(), Some("{}"));
    }

    #[test]
    fn handles_crlf_input() {
        let (mut store, _) = run_session(InMemoryStore::new(), "1\r\n书房\r\n书架\r\n字典\r\n5\r\n");
        let inv = store.load().unwrap().inventory;
        assert_eq!(inv.items_at("书房", "书架").unwrap(), ["字典"]);
    }
}
