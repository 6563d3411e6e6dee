use async_trait::async_trait;
use explainer_core::StageId;
use explainer_error::{ExplainerResult, StageError, StageErrorKind};
use explainer_pipeline::{PipelineOptions, Stage, StageDescriptor, create_pipeline};

static HALVER: StageDescriptor =
    StageDescriptor::new(StageId::Script, "Halver", "Halves even numbers");

struct Halver;

#[async_trait]
impl Stage for Halver {
    type Input = u32;
    type Output = u32;

    fn descriptor(&self) -> &StageDescriptor {
        &HALVER
    }

    async fn produce(&self, input: &u32) -> ExplainerResult<u32> {
        match *input {
            0 => panic!("zero"),
            n if n % 2 == 0 => Ok(n / 2),
            n => Err(
                StageError::new(StageErrorKind::Configuration(format!("{} is odd", n))).into(),
            ),
        }
    }
}

#[tokio::test]
async fn test_run_records_output() {
    let run = Halver.run(&8).await;

    assert!(run.is_success());
    assert_eq!(run.output(), Some(&4));
    assert_eq!(run.stage_id(), StageId::Script);
    assert_eq!(run.stage_name(), "Halver");
    assert!(run.started_at() <= run.finished_at());
}

#[tokio::test]
async fn test_run_records_error_reason() {
    let run = Halver.run(&3).await;

    assert!(run.output().is_none());
    assert_eq!(run.errors(), ["Configuration error: 3 is odd"]);
}

#[tokio::test]
async fn test_run_captures_panic() {
    let run = Halver.run(&0).await;

    assert!(run.output().is_none());
    assert_eq!(run.errors(), ["Unknown error"]);
}

#[test]
fn test_pipeline_stage_order() {
    let pipeline = create_pipeline(&PipelineOptions::default());

    let ids: Vec<StageId> = pipeline.descriptors().iter().map(|d| d.id()).collect();
    assert_eq!(ids, [StageId::Script, StageId::Voiceover, StageId::Video]);
    assert_eq!(pipeline.descriptors()[2].name(), "Video Generator");
}
