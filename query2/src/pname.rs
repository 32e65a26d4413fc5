//! Queried capability attributes.
//!
//! A _pname_ selects which piece of information `glGetInternalformat*v` reports for a
//! target / internal format pair. Beside the table itself, this module knows, for every pname,
//! the shape of the answer (see [`ValueShape`]).

use std::error;
use std::fmt;
use std::str::FromStr;

use crate::glenum::GLenum;

gl_enum! {
  /// Capability attribute accepted by `glGetInternalformat*v`.
  pub enum Pname {
    Samples = 0x80a9 => "GL_SAMPLES",
    NumSampleCounts = 0x9380 => "GL_NUM_SAMPLE_COUNTS",
    InternalformatSupported = 0x826f => "GL_INTERNALFORMAT_SUPPORTED",
    InternalformatPreferred = 0x8270 => "GL_INTERNALFORMAT_PREFERRED",
    InternalformatRedSize = 0x8271 => "GL_INTERNALFORMAT_RED_SIZE",
    InternalformatGreenSize = 0x8272 => "GL_INTERNALFORMAT_GREEN_SIZE",
    InternalformatBlueSize = 0x8273 => "GL_INTERNALFORMAT_BLUE_SIZE",
    InternalformatAlphaSize = 0x8274 => "GL_INTERNALFORMAT_ALPHA_SIZE",
    InternalformatDepthSize = 0x8275 => "GL_INTERNALFORMAT_DEPTH_SIZE",
    InternalformatStencilSize = 0x8276 => "GL_INTERNALFORMAT_STENCIL_SIZE",
    InternalformatSharedSize = 0x8277 => "GL_INTERNALFORMAT_SHARED_SIZE",
    InternalformatRedType = 0x8278 => "GL_INTERNALFORMAT_RED_TYPE",
    InternalformatGreenType = 0x8279 => "GL_INTERNALFORMAT_GREEN_TYPE",
    InternalformatBlueType = 0x827a => "GL_INTERNALFORMAT_BLUE_TYPE",
    InternalformatAlphaType = 0x827b => "GL_INTERNALFORMAT_ALPHA_TYPE",
    InternalformatDepthType = 0x827c => "GL_INTERNALFORMAT_DEPTH_TYPE",
    InternalformatStencilType = 0x827d => "GL_INTERNALFORMAT_STENCIL_TYPE",
    MaxWidth = 0x827e => "GL_MAX_WIDTH",
    MaxHeight = 0x827f => "GL_MAX_HEIGHT",
    MaxDepth = 0x8280 => "GL_MAX_DEPTH",
    MaxLayers = 0x8281 => "GL_MAX_LAYERS",
    MaxCombinedDimensions = 0x8282 => "GL_MAX_COMBINED_DIMENSIONS",
    ColorComponents = 0x8283 => "GL_COLOR_COMPONENTS",
    DepthComponents = 0x8284 => "GL_DEPTH_COMPONENTS",
    StencilComponents = 0x8285 => "GL_STENCIL_COMPONENTS",
    ColorRenderable = 0x8286 => "GL_COLOR_RENDERABLE",
    DepthRenderable = 0x8287 => "GL_DEPTH_RENDERABLE",
    StencilRenderable = 0x8288 => "GL_STENCIL_RENDERABLE",
    FramebufferRenderable = 0x8289 => "GL_FRAMEBUFFER_RENDERABLE",
    FramebufferRenderableLayered = 0x828a => "GL_FRAMEBUFFER_RENDERABLE_LAYERED",
    FramebufferBlend = 0x828b => "GL_FRAMEBUFFER_BLEND",
    ReadPixels = 0x828c => "GL_READ_PIXELS",
    ReadPixelsFormat = 0x828d => "GL_READ_PIXELS_FORMAT",
    ReadPixelsType = 0x828e => "GL_READ_PIXELS_TYPE",
    TextureImageFormat = 0x828f => "GL_TEXTURE_IMAGE_FORMAT",
    TextureImageType = 0x8290 => "GL_TEXTURE_IMAGE_TYPE",
    GetTextureImageFormat = 0x8291 => "GL_GET_TEXTURE_IMAGE_FORMAT",
    GetTextureImageType = 0x8292 => "GL_GET_TEXTURE_IMAGE_TYPE",
    Mipmap = 0x8293 => "GL_MIPMAP",
    ManualGenerateMipmap = 0x8294 => "GL_MANUAL_GENERATE_MIPMAP",
    AutoGenerateMipmap = 0x8295 => "GL_AUTO_GENERATE_MIPMAP",
    ColorEncoding = 0x8296 => "GL_COLOR_ENCODING",
    SrgbRead = 0x8297 => "GL_SRGB_READ",
    SrgbWrite = 0x8298 => "GL_SRGB_WRITE",
    SrgbDecodeArb = 0x8299 => "GL_SRGB_DECODE_ARB",
    Filter = 0x829a => "GL_FILTER",
    VertexTexture = 0x829b => "GL_VERTEX_TEXTURE",
    TessControlTexture = 0x829c => "GL_TESS_CONTROL_TEXTURE",
    TessEvaluationTexture = 0x829d => "GL_TESS_EVALUATION_TEXTURE",
    GeometryTexture = 0x829e => "GL_GEOMETRY_TEXTURE",
    FragmentTexture = 0x829f => "GL_FRAGMENT_TEXTURE",
    ComputeTexture = 0x82a0 => "GL_COMPUTE_TEXTURE",
    TextureShadow = 0x82a1 => "GL_TEXTURE_SHADOW",
    TextureGather = 0x82a2 => "GL_TEXTURE_GATHER",
    TextureGatherShadow = 0x82a3 => "GL_TEXTURE_GATHER_SHADOW",
    ShaderImageLoad = 0x82a4 => "GL_SHADER_IMAGE_LOAD",
    ShaderImageStore = 0x82a5 => "GL_SHADER_IMAGE_STORE",
    ShaderImageAtomic = 0x82a6 => "GL_SHADER_IMAGE_ATOMIC",
    ImageTexelSize = 0x82a7 => "GL_IMAGE_TEXEL_SIZE",
    ImageCompatibilityClass = 0x82a8 => "GL_IMAGE_COMPATIBILITY_CLASS",
    ImagePixelFormat = 0x82a9 => "GL_IMAGE_PIXEL_FORMAT",
    ImagePixelType = 0x82aa => "GL_IMAGE_PIXEL_TYPE",
    ImageFormatCompatibilityType = 0x90c7 => "GL_IMAGE_FORMAT_COMPATIBILITY_TYPE",
    SimultaneousTextureAndDepthTest = 0x82ac => "GL_SIMULTANEOUS_TEXTURE_AND_DEPTH_TEST",
    SimultaneousTextureAndStencilTest = 0x82ad => "GL_SIMULTANEOUS_TEXTURE_AND_STENCIL_TEST",
    SimultaneousTextureAndDepthWrite = 0x82ae => "GL_SIMULTANEOUS_TEXTURE_AND_DEPTH_WRITE",
    SimultaneousTextureAndStencilWrite = 0x82af => "GL_SIMULTANEOUS_TEXTURE_AND_STENCIL_WRITE",
    TextureCompressed = 0x86a1 => "GL_TEXTURE_COMPRESSED",
    TextureCompressedBlockWidth = 0x82b1 => "GL_TEXTURE_COMPRESSED_BLOCK_WIDTH",
    TextureCompressedBlockHeight = 0x82b2 => "GL_TEXTURE_COMPRESSED_BLOCK_HEIGHT",
    TextureCompressedBlockSize = 0x82b3 => "GL_TEXTURE_COMPRESSED_BLOCK_SIZE",
    ClearBuffer = 0x82b4 => "GL_CLEAR_BUFFER",
    TextureView = 0x82b5 => "GL_TEXTURE_VIEW",
    ViewCompatibilityClass = 0x82b6 => "GL_VIEW_COMPATIBILITY_CLASS",
  }
}

/// Shape of the value a pname answers with.
///
/// The shape decides how the raw integers of the result buffer get printed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueShape {
  /// A single plain integer (sizes, dimensions, counts).
  Integer,
  /// As many integers as `GL_NUM_SAMPLE_COUNTS` reports for the same target and format.
  SampleCounts,
  /// `GL_TRUE` or `GL_FALSE`.
  ///
  /// Those share their values with `GL_LINES` and `GL_POINTS`, so the generic enum lookup can’t be
  /// used.
  Boolean,
  /// A GL enum, zero meaning `GL_NONE`.
  ///
  /// Zero is also `GL_FALSE` and `GL_POINTS`; for these pnames it always means “none”.
  Enum,
}

impl Pname {
  /// Shape of the answer to that pname.
  pub fn shape(self) -> ValueShape {
    use Pname::*;

    match self {
      Samples => ValueShape::SampleCounts,

      NumSampleCounts
      | InternalformatRedSize
      | InternalformatGreenSize
      | InternalformatBlueSize
      | InternalformatAlphaSize
      | InternalformatDepthSize
      | InternalformatStencilSize
      | InternalformatSharedSize
      | MaxWidth
      | MaxHeight
      | MaxDepth
      | MaxLayers
      | MaxCombinedDimensions
      | ImageTexelSize
      | TextureCompressedBlockWidth
      | TextureCompressedBlockHeight
      | TextureCompressedBlockSize => ValueShape::Integer,

      InternalformatSupported
      | ColorComponents
      | DepthComponents
      | StencilComponents
      | ColorRenderable
      | DepthRenderable
      | StencilRenderable
      | Mipmap
      | TextureCompressed => ValueShape::Boolean,

      _ => ValueShape::Enum,
    }
  }
}

/// Error raised when a pname can’t be read from a string.
#[derive(Debug, Eq, PartialEq)]
pub enum PnameParseError {
  /// The input is a number but no pname has that value.
  UnknownValue(i64),
  /// The input is neither a number nor the name of a pname.
  UnknownName(String),
}

impl fmt::Display for PnameParseError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      PnameParseError::UnknownValue(v) => write!(
        f,
        "Value `{}' is not a valid <pname> for GetInternalformati*v.",
        v
      ),
      PnameParseError::UnknownName(ref n) => write!(
        f,
        "Value `{}' is not a valid <pname> for GetInternalformati*v.",
        n
      ),
    }
  }
}

impl error::Error for PnameParseError {}

/// Pnames parse from their decimal value, their `0x`-prefixed hexadecimal value or their name.
///
/// Names are matched case-insensitively, with or without the `GL_` prefix.
impl FromStr for Pname {
  type Err = PnameParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();

    let value = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
      i64::from_str_radix(hex, 16).ok()
    } else {
      s.parse::<i64>().ok()
    };

    if let Some(value) = value {
      return GLenum::try_from(value)
        .ok()
        .and_then(Pname::from_glenum)
        .ok_or(PnameParseError::UnknownValue(value));
    }

    let upper = s.to_ascii_uppercase();
    let name = if upper.starts_with("GL_") {
      upper
    } else {
      format!("GL_{}", upper)
    };

    Pname::ALL
      .iter()
      .copied()
      .find(|p| p.name() == name)
      .ok_or_else(|| PnameParseError::UnknownName(s.to_owned()))
  }
}
