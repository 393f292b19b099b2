//! 批量答卷处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量答卷的评分和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：加载参考答案、扫描答卷目录
//! 2. **并发控制**：使用 Semaphore 限制同时评分的答卷数量
//! 3. **分批处理**：将答卷分批次处理，每批完成后再开始下一批
//! 4. **错误隔离**：单份答卷失败（包括任务 panic）只记录，不影响其他答卷
//! 5. **全局统计**：汇总所有答卷的结果，生成合并成绩表

use crate::config::{Config, OutputFormat};
use crate::error::{DocumentError, GradingError, GradingStage};
use crate::models::document::{DocumentResult, SubmittedDocument};
use crate::models::loaders::{list_document_files, load_reference_table};
use crate::models::result::ResultTable;
use crate::orchestrator::document_processor::{self, DocumentSource};
use crate::utils::logging;
use crate::workflow::GradingFlow;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use futures::future::join_all;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: Arc<GradingFlow>,
    sources: Vec<DocumentSource>,
}

impl App {
    /// 初始化应用：加载参考答案表并扫描答卷目录
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(config.max_concurrent_documents);

        info!("\n📁 正在加载参考答案...");
        let table = load_reference_table(Path::new(&config.reference_key_file))
            .await
            .context("参考答案加载失败")?;
        let flow = GradingFlow::from_table(&table).with_verbose_logging(config.verbose_logging);

        info!("\n📁 正在扫描待评分的答卷...");
        let files = list_document_files(Path::new(&config.documents_folder))
            .await
            .with_context(|| format!("无法读取答卷目录: {}", config.documents_folder))?;
        let sources = files.into_iter().map(DocumentSource::File).collect();

        Ok(Self {
            config,
            flow: Arc::new(flow),
            sources,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(self) -> Result<BatchReport> {
        if self.sources.is_empty() {
            warn!("⚠️ 没有找到待评分的答卷，程序结束");
            return Ok(BatchReport::default());
        }

        logging::log_documents_loaded(self.sources.len(), self.config.max_concurrent_documents);

        let report = process_all_documents(
            self.flow.clone(),
            self.sources,
            self.config.max_concurrent_documents,
        )
        .await?;

        print_report(&report, self.config.output_format)?;
        logging::print_final_stats(
            report.results.len(),
            report.failures.len(),
            report.total(),
        );

        Ok(report)
    }
}

/// 一次批量评分的结果
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 成功评分的答卷（按输入顺序）
    pub results: Vec<DocumentResult>,
    /// 评分失败的答卷（按输入顺序）
    pub failures: Vec<DocumentError>,
    pub completed_at: Option<DateTime<Local>>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.results.len() + self.failures.len()
    }

    /// 合并所有答卷的成绩表
    pub fn combined_table(&self) -> ResultTable {
        ResultTable::combine(&self.results)
    }
}

/// 批量评分内存中的答卷
///
/// 所有答卷共享同一个评分流程（即同一份参考答案）
pub async fn grade_documents(
    flow: Arc<GradingFlow>,
    documents: Vec<SubmittedDocument>,
    max_concurrent: usize,
) -> Result<BatchReport> {
    let sources = documents.into_iter().map(DocumentSource::InMemory).collect();
    process_all_documents(flow, sources, max_concurrent).await
}

/// 处理所有答卷
async fn process_all_documents(
    flow: Arc<GradingFlow>,
    sources: Vec<DocumentSource>,
    max_concurrent: usize,
) -> Result<BatchReport> {
    let batch_size = max_concurrent.max(1);
    let semaphore = Arc::new(Semaphore::new(batch_size));
    let total = sources.len();
    let total_batches = total.div_ceil(batch_size);
    let mut report = BatchReport::default();

    let mut remaining = sources.into_iter().peekable();
    let mut batch_start = 0;

    // 分批处理
    while remaining.peek().is_some() {
        let batch: Vec<DocumentSource> = remaining.by_ref().take(batch_size).collect();
        let batch_end = batch_start + batch.len();
        let batch_num = batch_start / batch_size + 1;

        logging::log_batch_start(batch_num, total_batches, batch_start + 1, batch_end, total);

        let outcomes = process_batch(flow.clone(), batch, batch_start, semaphore.clone()).await?;

        let success = outcomes.iter().filter(|o| o.is_ok()).count();
        logging::log_batch_complete(batch_num, success, outcomes.len());

        for outcome in outcomes {
            match outcome {
                Ok(result) => report.results.push(result),
                Err(e) => report.failures.push(e),
            }
        }

        batch_start = batch_end;
    }

    report.completed_at = Some(Local::now());
    Ok(report)
}

/// 处理单个批次，结果顺序与输入一致
async fn process_batch(
    flow: Arc<GradingFlow>,
    batch: Vec<DocumentSource>,
    batch_start: usize,
    semaphore: Arc<Semaphore>,
) -> Result<Vec<Result<DocumentResult, DocumentError>>> {
    let mut names = Vec::with_capacity(batch.len());
    let mut handles = Vec::with_capacity(batch.len());

    // 为本批创建并发任务
    for (idx, source) in batch.into_iter().enumerate() {
        let document_index = batch_start + idx + 1;
        let permit = semaphore.clone().acquire_owned().await?;
        let flow = flow.clone();

        names.push(source.name());
        handles.push(tokio::spawn(async move {
            let _permit = permit;
            document_processor::process_document(&flow, source, document_index).await
        }));
    }

    // 等待本批所有任务完成
    let outcomes = join_all(handles)
        .await
        .into_iter()
        .zip(names)
        .enumerate()
        .map(|(idx, (joined, name))| {
            joined.unwrap_or_else(|e| {
                error!("[答卷 {}] 任务执行失败: {}", batch_start + idx + 1, e);
                Err(DocumentError::new(
                    name,
                    None,
                    GradingStage::Task,
                    GradingError::TaskFailed(e.to_string()),
                ))
            })
        })
        .collect();

    Ok(outcomes)
}

/// 输出合并成绩表与每份答卷的总分
fn print_report(report: &BatchReport, format: OutputFormat) -> Result<()> {
    let table = report.combined_table();

    match format {
        OutputFormat::Table => {
            println!("\n📌 合并成绩表");
            print!("{}", table);
            println!();
            for result in &report.results {
                println!(
                    "学号 {} ({}): {:.2}/{:.2}",
                    result.document_id,
                    result.source_name,
                    result.total_awarded,
                    result.total_possible
                );
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "results": table,
                "totals": report
                    .results
                    .iter()
                    .map(|r| serde_json::json!({
                        "Roll Number": r.document_id,
                        "source": r.source_name,
                        "Total Marks": r.total_awarded,
                        "Total Possible": r.total_possible,
                    }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    for failure in &report.failures {
        error!("❌ {}", failure);
    }

    Ok(())
}
