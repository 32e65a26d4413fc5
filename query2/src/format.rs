//! Internal formats.
//!
//! `GL_INTERNALFORMAT_SUPPORTED` must report true (with GL 4.2 or later) for:
//!
//! - the sized internal formats of the base, depth/stencil and image unit format tables;
//! - any specific compressed internal format;
//! - any generic compressed internal format, if the implementation accepts it for texture
//!   specification;
//! - unsized or base internal formats, if the implementation accepts them for texture or image
//!   specification.
//!
//! The table below walks all of them, grouped the same way.

gl_enum! {
  /// Pixel storage format identifier.
  pub enum InternalFormat {
    // base / unsized
    DepthComponent = 0x1902 => "GL_DEPTH_COMPONENT",
    DepthStencil = 0x84f9 => "GL_DEPTH_STENCIL",
    Red = 0x1903 => "GL_RED",
    Rg = 0x8227 => "GL_RG",
    Rgb = 0x1907 => "GL_RGB",
    Rgba = 0x1908 => "GL_RGBA",

    // sized color (image unit formats included)
    R8 = 0x8229 => "GL_R8",
    R8Snorm = 0x8f94 => "GL_R8_SNORM",
    R16 = 0x822a => "GL_R16",
    R16Snorm = 0x8f98 => "GL_R16_SNORM",
    Rg8 = 0x822b => "GL_RG8",
    Rg8Snorm = 0x8f95 => "GL_RG8_SNORM",
    Rg16 = 0x822c => "GL_RG16",
    Rg16Snorm = 0x8f99 => "GL_RG16_SNORM",
    R3G3B2 = 0x2a10 => "GL_R3_G3_B2",
    Rgb4 = 0x804f => "GL_RGB4",
    Rgb5 = 0x8050 => "GL_RGB5",
    Rgb8 = 0x8051 => "GL_RGB8",
    Rgb8Snorm = 0x8f96 => "GL_RGB8_SNORM",
    Rgb10 = 0x8052 => "GL_RGB10",
    Rgb12 = 0x8053 => "GL_RGB12",
    Rgb16 = 0x8054 => "GL_RGB16",
    Rgb16Snorm = 0x8f9a => "GL_RGB16_SNORM",
    Rgba2 = 0x8055 => "GL_RGBA2",
    Rgba4 = 0x8056 => "GL_RGBA4",
    Rgb5A1 = 0x8057 => "GL_RGB5_A1",
    Rgba8 = 0x8058 => "GL_RGBA8",
    Rgba8Snorm = 0x8f97 => "GL_RGBA8_SNORM",
    Rgb10A2 = 0x8059 => "GL_RGB10_A2",
    Rgb10A2UI = 0x906f => "GL_RGB10_A2UI",
    Rgba12 = 0x805a => "GL_RGBA12",
    Rgba16 = 0x805b => "GL_RGBA16",
    Rgba16Snorm = 0x8f9b => "GL_RGBA16_SNORM",
    Srgb8 = 0x8c41 => "GL_SRGB8",
    Srgb8Alpha8 = 0x8c43 => "GL_SRGB8_ALPHA8",
    R16F = 0x822d => "GL_R16F",
    Rg16F = 0x822f => "GL_RG16F",
    Rgb16F = 0x881b => "GL_RGB16F",
    Rgba16F = 0x881a => "GL_RGBA16F",
    R32F = 0x822e => "GL_R32F",
    Rg32F = 0x8230 => "GL_RG32F",
    Rgb32F = 0x8815 => "GL_RGB32F",
    Rgba32F = 0x8814 => "GL_RGBA32F",
    R11FG11FB10F = 0x8c3a => "GL_R11F_G11F_B10F",
    Rgb9E5 = 0x8c3d => "GL_RGB9_E5",
    R8I = 0x8231 => "GL_R8I",
    R8UI = 0x8232 => "GL_R8UI",
    R16I = 0x8233 => "GL_R16I",
    R16UI = 0x8234 => "GL_R16UI",
    R32I = 0x8235 => "GL_R32I",
    R32UI = 0x8236 => "GL_R32UI",
    Rg8I = 0x8237 => "GL_RG8I",
    // absent from older dumps, which list 88 formats
    Rg8UI = 0x8238 => "GL_RG8UI",
    Rg16I = 0x8239 => "GL_RG16I",
    Rg16UI = 0x823a => "GL_RG16UI",
    Rg32I = 0x823b => "GL_RG32I",
    Rg32UI = 0x823c => "GL_RG32UI",
    Rgb8I = 0x8d8f => "GL_RGB8I",
    Rgb8UI = 0x8d7d => "GL_RGB8UI",
    Rgb16I = 0x8d89 => "GL_RGB16I",
    Rgb16UI = 0x8d77 => "GL_RGB16UI",
    Rgb32I = 0x8d83 => "GL_RGB32I",
    Rgb32UI = 0x8d71 => "GL_RGB32UI",
    Rgba8I = 0x8d8e => "GL_RGBA8I",
    Rgba8UI = 0x8d7c => "GL_RGBA8UI",
    Rgba16I = 0x8d88 => "GL_RGBA16I",
    Rgba16UI = 0x8d76 => "GL_RGBA16UI",
    Rgba32I = 0x8d82 => "GL_RGBA32I",
    Rgba32UI = 0x8d70 => "GL_RGBA32UI",

    // sized depth / stencil
    DepthComponent16 = 0x81a5 => "GL_DEPTH_COMPONENT16",
    DepthComponent24 = 0x81a6 => "GL_DEPTH_COMPONENT24",
    DepthComponent32 = 0x81a7 => "GL_DEPTH_COMPONENT32",
    DepthComponent32F = 0x8cac => "GL_DEPTH_COMPONENT32F",
    Depth24Stencil8 = 0x88f0 => "GL_DEPTH24_STENCIL8",
    Depth32FStencil8 = 0x8cad => "GL_DEPTH32F_STENCIL8",

    // compressed, generic then specific
    CompressedRed = 0x8225 => "GL_COMPRESSED_RED",
    CompressedRg = 0x8226 => "GL_COMPRESSED_RG",
    CompressedRgb = 0x84ed => "GL_COMPRESSED_RGB",
    CompressedRgba = 0x84ee => "GL_COMPRESSED_RGBA",
    CompressedSrgb = 0x8c48 => "GL_COMPRESSED_SRGB",
    CompressedSrgbAlpha = 0x8c49 => "GL_COMPRESSED_SRGB_ALPHA",
    CompressedRedRgtc1 = 0x8dbb => "GL_COMPRESSED_RED_RGTC1",
    CompressedSignedRedRgtc1 = 0x8dbc => "GL_COMPRESSED_SIGNED_RED_RGTC1",
    CompressedRgRgtc2 = 0x8dbd => "GL_COMPRESSED_RG_RGTC2",
    CompressedSignedRgRgtc2 = 0x8dbe => "GL_COMPRESSED_SIGNED_RG_RGTC2",
    CompressedRgbaBptcUnorm = 0x8e8c => "GL_COMPRESSED_RGBA_BPTC_UNORM",
    CompressedSrgbAlphaBptcUnorm = 0x8e8d => "GL_COMPRESSED_SRGB_ALPHA_BPTC_UNORM",
    CompressedRgbBptcSignedFloat = 0x8e8e => "GL_COMPRESSED_RGB_BPTC_SIGNED_FLOAT",
    CompressedRgbBptcUnsignedFloat = 0x8e8f => "GL_COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_format_once() {
    assert_eq!(InternalFormat::ALL.len(), 89);

    for (i, a) in InternalFormat::ALL.iter().enumerate() {
      assert!(InternalFormat::ALL[i + 1..]
        .iter()
        .all(|b| a.to_glenum() != b.to_glenum() && a.name() != b.name()));
    }
  }

  #[test]
  fn base_formats_come_first() {
    assert_eq!(InternalFormat::ALL[0], InternalFormat::DepthComponent);
    assert_eq!(InternalFormat::from_glenum(0x1908), Some(InternalFormat::Rgba));
    assert_eq!(InternalFormat::from_glenum(0x1400), None);
  }

  #[test]
  fn rg8ui_sits_between_rg8i_and_rg16i() {
    let pos = |f| InternalFormat::ALL.iter().position(|&x| x == f);
    let rg8ui = pos(InternalFormat::Rg8UI).unwrap();

    assert_eq!(pos(InternalFormat::Rg8I), Some(rg8ui - 1));
    assert_eq!(pos(InternalFormat::Rg16I), Some(rg8ui + 1));
    assert_eq!(InternalFormat::from_glenum(0x8238), Some(InternalFormat::Rg8UI));
  }
}
