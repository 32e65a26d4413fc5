//! Texture and renderbuffer targets.

gl_enum! {
  /// Storage kind a query applies to.
  ///
  /// These are the targets `glGetInternalformat*v` accepts with `GL_ARB_internalformat_query2`.
  pub enum Target {
    Texture1D = 0x0de0 => "GL_TEXTURE_1D",
    Texture1DArray = 0x8c18 => "GL_TEXTURE_1D_ARRAY",
    Texture2D = 0x0de1 => "GL_TEXTURE_2D",
    Texture2DArray = 0x8c1a => "GL_TEXTURE_2D_ARRAY",
    Texture3D = 0x806f => "GL_TEXTURE_3D",
    TextureCubeMap = 0x8513 => "GL_TEXTURE_CUBE_MAP",
    TextureCubeMapArray = 0x9009 => "GL_TEXTURE_CUBE_MAP_ARRAY",
    TextureRectangle = 0x84f5 => "GL_TEXTURE_RECTANGLE",
    TextureBuffer = 0x8c2a => "GL_TEXTURE_BUFFER",
    Renderbuffer = 0x8d41 => "GL_RENDERBUFFER",
    Texture2DMultisample = 0x9100 => "GL_TEXTURE_2D_MULTISAMPLE",
    Texture2DMultisampleArray = 0x9102 => "GL_TEXTURE_2D_MULTISAMPLE_ARRAY",
  }
}
