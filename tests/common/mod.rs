//! In-process stand-in for the service.

use async_trait::async_trait;
use automl_snippets::error_code::ServiceErrorCode;
use automl_snippets::types::{
    AnnotationPayload, ClassificationAnnotation, CreateModelRequest, OperationHandle,
    PredictRequest, PredictResponse,
};
use automl_snippets::{Error, Result, ServiceInvoker};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// What every call to the stub answers with.
pub enum Reply {
    Prediction(PredictResponse),
    Operation(String),
    Remote {
        status: u16,
        code: ServiceErrorCode,
        message: String,
    },
}

pub struct RecordingInvoker {
    reply: Reply,
    calls: AtomicUsize,
    pub predict_requests: Mutex<Vec<PredictRequest>>,
    pub create_requests: Mutex<Vec<CreateModelRequest>>,
}

impl RecordingInvoker {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            predict_requests: Mutex::new(Vec::new()),
            create_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn classifying(name: &str, score: f32) -> Self {
        Self::new(Reply::Prediction(PredictResponse {
            payload: vec![AnnotationPayload {
                display_name: name.to_string(),
                classification: Some(ClassificationAnnotation { score }),
                ..Default::default()
            }],
            ..Default::default()
        }))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self) -> Result<Reply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Prediction(p) => Ok(Reply::Prediction(p.clone())),
            Reply::Operation(name) => Ok(Reply::Operation(name.clone())),
            Reply::Remote {
                status,
                code,
                message,
            } => Err(Error::Remote {
                status: *status,
                code: *code,
                message: message.clone(),
            }),
        }
    }
}

#[async_trait]
impl ServiceInvoker for RecordingInvoker {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
        self.predict_requests.lock().unwrap().push(request.clone());
        match self.answer()? {
            Reply::Prediction(p) => Ok(p),
            _ => panic!("stub configured for a different call"),
        }
    }

    async fn create_model(&self, request: &CreateModelRequest) -> Result<OperationHandle> {
        self.create_requests.lock().unwrap().push(request.clone());
        match self.answer()? {
            Reply::Operation(name) => Ok(OperationHandle::new(name)),
            _ => panic!("stub configured for a different call"),
        }
    }
}
