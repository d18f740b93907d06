// ==========================================
// 记录型协作方 - 用于断言回调次数与参数
// ==========================================

use academic_data_entry::domain::{RecordKind, ScientificRecord, StagedRecord};
use academic_data_entry::importer::{Clipboard, Confirmer, IdGenerator, ImportSink, LinkOpener};
use academic_data_entry::scientific::ScientificRecordStore;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ==========================================
// RecordingSink
// ==========================================
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<(RecordKind, Vec<StagedRecord>)>,
}

impl ImportSink for RecordingSink {
    fn import_batch(&mut self, kind: RecordKind, records: Vec<StagedRecord>) {
        self.calls.push((kind, records));
    }
}

// ==========================================
// RecordingStore
// ==========================================
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub records: Vec<ScientificRecord>,
    pub add_calls: usize,
    pub delete_calls: Vec<String>,
}

impl ScientificRecordStore for RecordingStore {
    fn add_scientific_record(&mut self, record: ScientificRecord) {
        self.add_calls += 1;
        self.records.push(record);
    }

    fn delete_scientific_record(&mut self, id: &str) {
        self.delete_calls.push(id.to_string());
        self.records.retain(|r| r.id != id);
    }

    fn list_scientific_records(&self) -> Vec<ScientificRecord> {
        self.records.clone()
    }
}

// ==========================================
// ScriptedConfirmer
// ==========================================
/// 固定应答并记录被问到的消息
#[derive(Debug)]
pub struct ScriptedConfirmer {
    pub answer: bool,
    pub asked: Vec<String>,
}

impl ScriptedConfirmer {
    pub fn yes() -> Self {
        Self {
            answer: true,
            asked: Vec::new(),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            asked: Vec::new(),
        }
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.answer
    }
}

// ==========================================
// 副作用
// ==========================================

/// 共享缓冲区的剪贴板（交给 AppState 后仍可断言）
#[derive(Debug, Clone, Default)]
pub struct SharedClipboard {
    pub contents: Arc<Mutex<Vec<String>>>,
}

impl Clipboard for SharedClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SharedOpener {
    pub opened: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl LinkOpener for SharedOpener {
    fn open(&mut self, url: &str) -> Result<(), Box<dyn Error>> {
        if self.fail {
            return Err("浏览器不可用".into());
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

// ==========================================
// SeqIdGenerator
// ==========================================
/// 可预测的标识: <prefix>-1, <prefix>-2, ...
#[derive(Debug)]
pub struct SeqIdGenerator {
    prefix: String,
    next: AtomicUsize,
}

impl SeqIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: AtomicUsize::new(1),
        }
    }

    pub fn boxed(prefix: &str) -> Box<dyn IdGenerator> {
        Box::new(Self::new(prefix))
    }
}

impl IdGenerator for SeqIdGenerator {
    fn next_id(&self) -> String {
        format!("{}-{}", self.prefix, self.next.fetch_add(1, Ordering::SeqCst))
    }
}
