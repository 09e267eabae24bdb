use serde::{Deserialize, Serialize};

use crate::encoding::EncodedImage;
use crate::error::Result;

/// One call to the image-generation service: an instruction plus one input image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub instruction: String,
    pub image: EncodedImage,
}

/// Images returned by the service, in the order produced. May be empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub images: Vec<EncodedImage>,
}

/// The external image-generation service.
pub trait ImageGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse>;
}

impl<G: ImageGenerator + ?Sized> ImageGenerator for &G {
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        (**self).generate(request)
    }
}
