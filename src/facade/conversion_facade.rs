use std::fs;
use std::io;
use std::path::Path;
use log::{debug, info, warn};
use crate::config::config::{OutputFormat, SOURCE_EXTENSION};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{BatchOutcome, ConversionInput, ConversionOutput};
use crate::models::file::{Discovery, FileCollectInput, InputFile};
use crate::service::file::FileService;
use crate::service::image::ImageService;
use crate::service::traits::i_service::{FileServiceTrait, ImageServiceTrait};
use crate::utils::report::{render_failure, render_found};
use crate::utils::utils::{create_progress_bar, progress_label};
use crate::utils::utils::ProgressManager;

pub struct ConversionFacade {
    file_service: Box<dyn FileServiceTrait>,
    image_service: Box<dyn ImageServiceTrait>,
}

impl ConversionFacade {
    pub fn new(
        file_service: Box<dyn FileServiceTrait>,
        image_service: Box<dyn ImageServiceTrait>,
    ) -> Self {
        ConversionFacade {
            file_service,
            image_service,
        }
    }
}

impl Default for ConversionFacade {
    fn default() -> Self {
        Self::new(Box::new(FileService::new()), Box::new(ImageService::default()))
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn discover(&self, input_dir: &Path) -> io::Result<Discovery> {
        self.file_service.collect_files(FileCollectInput {
            input_dir: input_dir.to_path_buf(),
            extension: SOURCE_EXTENSION.to_string(),
        })
    }

    fn convert(&self, files: &[InputFile], output_dir: &Path, progress: &ProgressManager) -> io::Result<BatchOutcome> {
        fs::create_dir_all(output_dir)?;

        let items: Vec<_> = files
            .iter()
            .map(|file| {
                let item = self.image_service.convert_file(file, output_dir);
                match &item {
                    Ok(_) => progress.advance(Some(&progress_label(&file.stem(), OutputFormat::Png.extension()))),
                    Err(e) => {
                        debug!("轉換失敗：{}，原因：{}", file.path.display(), e);
                        progress.println(&render_failure(&file.name, e));
                        progress.advance(None);
                    }
                }
                (file.name.clone(), item)
            })
            .collect();
        progress.finish();

        let outcome = BatchOutcome::partition(items);
        info!(
            "批次轉換結束，成功 {} 個，失敗 {} 個",
            outcome.results.len(),
            outcome.failures.len()
        );
        Ok(outcome)
    }

    fn execute_conversion(&self, input: ConversionInput) -> io::Result<ConversionOutput> {
        info!("開始轉換，輸入目錄：{}，輸出目錄：{}", input.input_dir.display(), input.output_dir.display());
        let output_path = input.output_dir.display().to_string();

        let files = match self.discover(&input.input_dir)? {
            Discovery::Empty => {
                warn!("無符合條件的檔案可處理");
                return Ok(ConversionOutput {
                    output_path,
                    discovered: 0,
                    outcome: BatchOutcome::default(),
                });
            }
            Discovery::Found(files) => files,
        };

        let pm = create_progress_bar(files.len() as u64, input.no_progress);
        pm.println(&render_found(files.len(), input.format));
        let outcome = self.convert(&files, &input.output_dir, &pm)?;

        Ok(ConversionOutput {
            output_path,
            discovered: files.len(),
            outcome,
        })
    }
}
