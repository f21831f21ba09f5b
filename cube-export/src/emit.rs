//! Java source emission for `ModelBase` subclasses.
//!
//! All numeric formatting lives here: floats are fixed 6-decimal with an `f` suffix,
//! integers are plain.

use std::collections::HashSet;

use cube_model::{Cuboid, TextureAtlas};
use tracing::warn;

use crate::ExportOptions;

pub const FLOAT_SUFFIX: char = 'f';

/// `addBox` inflate argument. Always zero.
pub const SCALE_FACTOR: &str = "0f";

const INDENT: &str = "    ";

const IMPORTS: [&str; 6] = [
    "net.minecraft.client.model.ModelBase",
    "net.minecraft.client.model.ModelRenderer",
    "net.minecraft.entity.Entity",
    "net.minecraft.entity.EntityLivingBase",
    "net.minecraftforge.fml.relauncher.Side",
    "net.minecraftforge.fml.relauncher.SideOnly",
];

// Reserved words and literals; none of them may name a member or type.
const JAVA_KEYWORDS: [&str; 54] = [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

// Fields inherited from `ModelBase` plus the ones every generated class declares.
const MODEL_BASE_MEMBERS: [&str; 7] = [
    "textureWidth",
    "textureHeight",
    "boxList",
    "swingProgress",
    "isRiding",
    "isChild",
    "partialTicks",
];

/// Non-finite values become the matching `Float` constant.
pub fn float_literal(value: f64) -> String {
    if value.is_finite() {
        return format!("{value:.6}{FLOAT_SUFFIX}");
    }
    warn!("non-finite value {value} written as a Float constant");
    let constant = if value.is_nan() {
        "NaN"
    } else if value > 0.0 {
        "POSITIVE_INFINITY"
    } else {
        "NEGATIVE_INFINITY"
    };
    format!("Float.{constant}")
}

/// Map a host name onto a valid Java identifier.
pub fn java_identifier(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if JAVA_KEYWORDS.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

/// Identifiers already taken in one Java namespace of the generated class.
///
/// Sanitizing is lossy (`Cube.001` and `Cube_001` meet), so every emitted member
/// and type name is claimed here first.
#[derive(Debug, Default)]
pub struct NameScope {
    taken: HashSet<String>,
}

impl NameScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserving(names: &[&str]) -> Self {
        Self {
            taken: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    /// Sanitized `name`, suffixed with `_2`, `_3`, ... until unused.
    pub fn claim(&mut self, name: &str) -> String {
        let base = java_identifier(name);
        if self.taken.insert(base.clone()) {
            return base;
        }
        let mut n = 2u32;
        loop {
            let candidate = format!("{base}_{n}");
            if self.taken.insert(candidate.clone()) {
                warn!("`{name}` clashes with another Java name, emitting `{candidate}`");
                return candidate;
            }
            n += 1;
        }
    }
}

/// A cuboid with every field already rendered as Java source text.
#[derive(Debug, Clone, PartialEq)]
pub struct CuboidFields {
    pub name: String,
    pub texture_offset: [String; 2],
    pub offset: [String; 3],
    pub size: [String; 3],
    pub pivot: [String; 3],
    pub rotation: [String; 3],
}

impl From<&Cuboid> for CuboidFields {
    fn from(cuboid: &Cuboid) -> Self {
        Self {
            name: java_identifier(&cuboid.name),
            texture_offset: cuboid.texture_offset.map(|v| v.to_string()),
            offset: cuboid.offset.map(float_literal),
            size: cuboid.size.map(|v| v.to_string()),
            pivot: cuboid.pivot.map(float_literal),
            rotation: cuboid.rotation.map(float_literal),
        }
    }
}

impl CuboidFields {
    pub fn declaration(&self) -> String {
        format!("public ModelRenderer {};", self.name)
    }

    pub fn instantiation(&self) -> [String; 7] {
        let n = &self.name;
        let [u, v] = &self.texture_offset;
        let [ox, oy, oz] = &self.offset;
        let [w, h, d] = &self.size;
        let [px, py, pz] = &self.pivot;
        let [rx, ry, rz] = &self.rotation;
        [
            format!("this.{n} = new ModelRenderer(this, {u}, {v});"),
            format!("this.{n}.addBox({ox}, {oy}, {oz}, {w}, {h}, {d}, {SCALE_FACTOR});"),
            format!("this.{n}.setRotationPoint({px}, {py}, {pz});"),
            format!("this.{n}.rotateAngleX = {rx};"),
            format!("this.{n}.rotateAngleY = {ry};"),
            format!("this.{n}.rotateAngleZ = {rz};"),
            format!("this.{n}.mirror = true;"),
        ]
    }

    pub fn render_call(&self) -> String {
        format!("this.{}.render(scale);", self.name)
    }
}

/// Indentation-aware line buffer. Single writer per export pass.
#[derive(Debug, Default)]
pub struct JavaWriter {
    buf: String,
    depth: usize,
}

impl JavaWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn open(&mut self, header: impl AsRef<str>) {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
    }

    /// Open a block whose header is wrapped onto a double-indented second line.
    pub fn open_wrapped(&mut self, first: impl AsRef<str>, rest: impl AsRef<str>) {
        self.line(first);
        self.depth += 2;
        self.line(format!("{} {{", rest.as_ref()));
        self.depth -= 1;
    }

    pub fn close(&mut self) {
        self.close_with("");
    }

    pub fn close_with(&mut self, suffix: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(format!("}}{suffix}"));
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Extra class content contributed by an export variant.
pub trait ClassExtras {
    /// Claim every member and type name the extras emit. Runs after the cuboid fields.
    fn declare(&mut self, _members: &mut NameScope, _types: &mut NameScope) {}
    /// Written after the `ModelRenderer` declarations.
    fn members(&self, _w: &mut JavaWriter) {}
    /// Written just before the class closes.
    fn inner_types(&self, _w: &mut JavaWriter) {}
}

pub struct NoExtras;

impl ClassExtras for NoExtras {}

pub fn write_model_class(
    options: &ExportOptions,
    texture: TextureAtlas,
    cuboids: &[Cuboid],
    extras: &mut dyn ClassExtras,
) -> String {
    let class_name = options.class_name();
    let mut members = NameScope::reserving(&MODEL_BASE_MEMBERS);
    let mut types = NameScope::reserving(&[class_name.as_str()]);
    let fields: Vec<CuboidFields> = cuboids
        .iter()
        .map(|cuboid| CuboidFields {
            name: members.claim(&cuboid.name),
            ..CuboidFields::from(cuboid)
        })
        .collect();
    extras.declare(&mut members, &mut types);

    let mut w = JavaWriter::new();

    if let Some(package) = options.package.as_deref().filter(|p| !p.is_empty()) {
        w.line(format!("package {package};"));
        w.blank();
    }
    for import in IMPORTS {
        w.line(format!("import {import};"));
    }
    w.blank();
    w.line("@SideOnly(Side.CLIENT)");
    w.open(format!("class {class_name} extends ModelBase"));
    w.blank();
    w.line("private float partialTicks;");
    w.blank();
    for f in &fields {
        w.line(f.declaration());
    }
    extras.members(&mut w);

    w.blank();
    w.open(format!("public {class_name}()"));
    w.line(format!("this.textureWidth = {};", texture.width));
    w.line(format!("this.textureHeight = {};", texture.height));
    for f in &fields {
        w.blank();
        for line in f.instantiation() {
            w.line(line);
        }
    }
    w.close();

    w.blank();
    w.line("@Override");
    w.open_wrapped(
        "public void setLivingAnimations(EntityLivingBase entity, float limbSwing, float limbSwingAmount,",
        "float partialTicks)",
    );
    w.line("this.partialTicks = partialTicks;");
    w.close();

    w.blank();
    w.line("@Override");
    w.open_wrapped(
        "public void render(Entity entity, float limbSwing, float limbSwingAmount, float ageInTicks, float netHeadYaw,",
        "float headPitch, float scale)",
    );
    w.line(
        "this.setRotationAngles(limbSwing, limbSwingAmount, ageInTicks, netHeadYaw, headPitch, scale, entity);",
    );
    if !fields.is_empty() {
        w.blank();
    }
    for f in &fields {
        w.line(f.render_call());
    }
    w.close();

    // Hook for runtime-computed angles; the consuming mod fills it in.
    w.blank();
    w.open_wrapped(
        "public void setRotationAngles(float limbSwing, float limbSwingAmount, float ageInTicks, float netHeadYaw,",
        "float headPitch, float scale, Entity entity)",
    );
    w.close();

    extras.inner_types(&mut w);
    w.close();
    w.finish()
}
