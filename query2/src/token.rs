//! Tokens a query may answer with.
//!
//! Internal formats, targets and pnames have their own tables; this one gathers everything else an
//! enum-shaped pname can report: support levels, component types, pixel transfer formats and
//! types, color encodings, image and view compatibility classes.

gl_enum! {
  /// GL value reported by an enum-shaped pname.
  pub enum Token {
    GlNone = 0x0000 => "GL_NONE",

    // support levels
    FullSupport = 0x82b7 => "GL_FULL_SUPPORT",
    CaveatSupport = 0x82b8 => "GL_CAVEAT_SUPPORT",

    // component types
    UnsignedNormalized = 0x8c17 => "GL_UNSIGNED_NORMALIZED",
    SignedNormalized = 0x8f9c => "GL_SIGNED_NORMALIZED",

    // pixel transfer formats (the base internal formats are looked up first)
    StencilIndex = 0x1901 => "GL_STENCIL_INDEX",
    Green = 0x1904 => "GL_GREEN",
    Blue = 0x1905 => "GL_BLUE",
    Alpha = 0x1906 => "GL_ALPHA",
    Bgr = 0x80e0 => "GL_BGR",
    Bgra = 0x80e1 => "GL_BGRA",
    RgInteger = 0x8228 => "GL_RG_INTEGER",
    RedInteger = 0x8d94 => "GL_RED_INTEGER",
    RgbInteger = 0x8d98 => "GL_RGB_INTEGER",
    RgbaInteger = 0x8d99 => "GL_RGBA_INTEGER",
    BgrInteger = 0x8d9a => "GL_BGR_INTEGER",
    BgraInteger = 0x8d9b => "GL_BGRA_INTEGER",

    // pixel transfer types
    Byte = 0x1400 => "GL_BYTE",
    UnsignedByte = 0x1401 => "GL_UNSIGNED_BYTE",
    Short = 0x1402 => "GL_SHORT",
    UnsignedShort = 0x1403 => "GL_UNSIGNED_SHORT",
    Int = 0x1404 => "GL_INT",
    UnsignedInt = 0x1405 => "GL_UNSIGNED_INT",
    Float = 0x1406 => "GL_FLOAT",
    HalfFloat = 0x140b => "GL_HALF_FLOAT",
    UnsignedByte332 = 0x8032 => "GL_UNSIGNED_BYTE_3_3_2",
    UnsignedShort4444 = 0x8033 => "GL_UNSIGNED_SHORT_4_4_4_4",
    UnsignedShort5551 = 0x8034 => "GL_UNSIGNED_SHORT_5_5_5_1",
    UnsignedInt8888 = 0x8035 => "GL_UNSIGNED_INT_8_8_8_8",
    UnsignedInt1010102 = 0x8036 => "GL_UNSIGNED_INT_10_10_10_2",
    UnsignedByte233Rev = 0x8362 => "GL_UNSIGNED_BYTE_2_3_3_REV",
    UnsignedShort565 = 0x8363 => "GL_UNSIGNED_SHORT_5_6_5",
    UnsignedShort565Rev = 0x8364 => "GL_UNSIGNED_SHORT_5_6_5_REV",
    UnsignedShort4444Rev = 0x8365 => "GL_UNSIGNED_SHORT_4_4_4_4_REV",
    UnsignedShort1555Rev = 0x8366 => "GL_UNSIGNED_SHORT_1_5_5_5_REV",
    UnsignedInt8888Rev = 0x8367 => "GL_UNSIGNED_INT_8_8_8_8_REV",
    UnsignedInt2101010Rev = 0x8368 => "GL_UNSIGNED_INT_2_10_10_10_REV",
    UnsignedInt248 = 0x84fa => "GL_UNSIGNED_INT_24_8",
    UnsignedInt10F11F11FRev = 0x8c3b => "GL_UNSIGNED_INT_10F_11F_11F_REV",
    UnsignedInt5999Rev = 0x8c3e => "GL_UNSIGNED_INT_5_9_9_9_REV",
    Float32UnsignedInt248Rev = 0x8dad => "GL_FLOAT_32_UNSIGNED_INT_24_8_REV",

    // color encodings
    Linear = 0x2601 => "GL_LINEAR",
    Srgb = 0x8c40 => "GL_SRGB",

    // image format compatibility
    ImageClass4X32 = 0x82b9 => "GL_IMAGE_CLASS_4_X_32",
    ImageClass2X32 = 0x82ba => "GL_IMAGE_CLASS_2_X_32",
    ImageClass1X32 = 0x82bb => "GL_IMAGE_CLASS_1_X_32",
    ImageClass4X16 = 0x82bc => "GL_IMAGE_CLASS_4_X_16",
    ImageClass2X16 = 0x82bd => "GL_IMAGE_CLASS_2_X_16",
    ImageClass1X16 = 0x82be => "GL_IMAGE_CLASS_1_X_16",
    ImageClass4X8 = 0x82bf => "GL_IMAGE_CLASS_4_X_8",
    ImageClass2X8 = 0x82c0 => "GL_IMAGE_CLASS_2_X_8",
    ImageClass1X8 = 0x82c1 => "GL_IMAGE_CLASS_1_X_8",
    ImageClass111110 = 0x82c2 => "GL_IMAGE_CLASS_11_11_10",
    ImageClass1010102 = 0x82c3 => "GL_IMAGE_CLASS_10_10_10_2",
    ImageFormatCompatibilityBySize = 0x90c8 => "GL_IMAGE_FORMAT_COMPATIBILITY_BY_SIZE",
    ImageFormatCompatibilityByClass = 0x90c9 => "GL_IMAGE_FORMAT_COMPATIBILITY_BY_CLASS",

    // texture view compatibility
    ViewClass128Bits = 0x82c4 => "GL_VIEW_CLASS_128_BITS",
    ViewClass96Bits = 0x82c5 => "GL_VIEW_CLASS_96_BITS",
    ViewClass64Bits = 0x82c6 => "GL_VIEW_CLASS_64_BITS",
    ViewClass48Bits = 0x82c7 => "GL_VIEW_CLASS_48_BITS",
    ViewClass32Bits = 0x82c8 => "GL_VIEW_CLASS_32_BITS",
    ViewClass24Bits = 0x82c9 => "GL_VIEW_CLASS_24_BITS",
    ViewClass16Bits = 0x82ca => "GL_VIEW_CLASS_16_BITS",
    ViewClass8Bits = 0x82cb => "GL_VIEW_CLASS_8_BITS",
    ViewClassS3tcDxt1Rgb = 0x82cc => "GL_VIEW_CLASS_S3TC_DXT1_RGB",
    ViewClassS3tcDxt1Rgba = 0x82cd => "GL_VIEW_CLASS_S3TC_DXT1_RGBA",
    ViewClassS3tcDxt3Rgba = 0x82ce => "GL_VIEW_CLASS_S3TC_DXT3_RGBA",
    ViewClassS3tcDxt5Rgba = 0x82cf => "GL_VIEW_CLASS_S3TC_DXT5_RGBA",
    ViewClassRgtc1Red = 0x82d0 => "GL_VIEW_CLASS_RGTC1_RED",
    ViewClassRgtc2Rg = 0x82d1 => "GL_VIEW_CLASS_RGTC2_RG",
    ViewClassBptcUnorm = 0x82d2 => "GL_VIEW_CLASS_BPTC_UNORM",
    ViewClassBptcFloat = 0x82d3 => "GL_VIEW_CLASS_BPTC_FLOAT",
  }
}
