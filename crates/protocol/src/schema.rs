#![forbid(unsafe_code)]

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRange {
    pub low: i16,
    pub high: i16,
}

impl VersionRange {
    pub const NONE: Self = Self { low: 0, high: -1 };

    pub const fn new(low: i16, high: i16) -> Self {
        Self { low, high }
    }

    /// `low+`, open ended.
    pub const fn from(low: i16) -> Self {
        Self {
            low,
            high: i16::MAX,
        }
    }

    pub const fn exact(version: i16) -> Self {
        Self {
            low: version,
            high: version,
        }
    }

    pub const fn is_none(self) -> bool {
        self.low > self.high
    }

    pub const fn contains(self, version: i16) -> bool {
        self.low <= version && version <= self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Request,
    Response,
    Header,
    Data,
}

/// Scalar element types allowed inside arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Bool,
    Int8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Float64,
    String,
    Uuid,
    Struct(&'static StructSchema),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Bool,
    Int8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Float64,
    String,
    Bytes,
    Records,
    Uuid,
    Struct(&'static StructSchema),
    Array(ElementType),
}

impl ElementType {
    pub const fn as_field_type(self) -> FieldType {
        match self {
            Self::Bool => FieldType::Bool,
            Self::Int8 => FieldType::Int8,
            Self::Int16 => FieldType::Int16,
            Self::Uint16 => FieldType::Uint16,
            Self::Int32 => FieldType::Int32,
            Self::Uint32 => FieldType::Uint32,
            Self::Int64 => FieldType::Int64,
            Self::Float64 => FieldType::Float64,
            Self::String => FieldType::String,
            Self::Uuid => FieldType::Uuid,
            Self::Struct(schema) => FieldType::Struct(schema),
        }
    }
}

impl FieldType {
    /// Name as written in the JSON message definitions.
    pub fn type_name(self) -> String {
        match self {
            Self::Bool => "bool".to_string(),
            Self::Int8 => "int8".to_string(),
            Self::Int16 => "int16".to_string(),
            Self::Uint16 => "uint16".to_string(),
            Self::Int32 => "int32".to_string(),
            Self::Uint32 => "uint32".to_string(),
            Self::Int64 => "int64".to_string(),
            Self::Float64 => "float64".to_string(),
            Self::String => "string".to_string(),
            Self::Bytes => "bytes".to_string(),
            Self::Records => "records".to_string(),
            Self::Uuid => "uuid".to_string(),
            Self::Struct(schema) => schema.name.to_string(),
            Self::Array(element) => format!("[]{}", element.as_field_type().type_name()),
        }
    }

    pub(crate) const fn kind(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bytes | Self::Records => "bytes",
            Self::Uuid => "uuid",
            Self::Struct(_) => "struct",
            Self::Array(_) => "array",
        }
    }
}

/// Value a field takes when it is absent from the decoded version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Zero, empty string, empty array, nil UUID or a struct of defaults.
    Zero,
    Int(i64),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub field_type: FieldType,
    pub versions: VersionRange,
    pub nullable_versions: VersionRange,
    pub tag: Option<u32>,
    pub tagged_versions: VersionRange,
    pub default: FieldDefault,
}

impl FieldSchema {
    pub const fn new(name: &'static str, field_type: FieldType, versions: VersionRange) -> Self {
        Self {
            name,
            field_type,
            versions,
            nullable_versions: VersionRange::NONE,
            tag: None,
            tagged_versions: VersionRange::NONE,
            default: FieldDefault::Zero,
        }
    }

    pub const fn nullable(self, nullable_versions: VersionRange) -> Self {
        Self {
            nullable_versions,
            ..self
        }
    }

    pub const fn tagged(self, tag: u32, tagged_versions: VersionRange) -> Self {
        Self {
            tag: Some(tag),
            tagged_versions,
            ..self
        }
    }

    pub const fn default_value(self, default: FieldDefault) -> Self {
        Self { default, ..self }
    }

    pub const fn is_present_in(&self, version: i16) -> bool {
        self.versions.contains(version)
    }

    pub const fn is_nullable_in(&self, version: i16) -> bool {
        self.nullable_versions.contains(version)
    }

    /// Whether the field travels in the tagged trailer at `version`.
    pub const fn is_tagged_in(&self, version: i16) -> bool {
        self.tag.is_some() && self.tagged_versions.contains(version)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct StructSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSchema],
}

impl StructSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    fn tagged_field_index(&self, tag: u32, version: i16) -> Option<usize> {
        self.fields.iter().position(|field| {
            field.tag == Some(tag) && field.is_present_in(version) && field.is_tagged_in(version)
        })
    }

    pub(crate) fn resolve_tag(&self, tag: u32, version: i16) -> Option<(usize, &FieldSchema)> {
        self.tagged_field_index(tag, version)
            .map(|index| (index, &self.fields[index]))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct MessageSchema {
    pub name: &'static str,
    pub api_key: i16,
    pub message_type: MessageType,
    pub valid_versions: VersionRange,
    pub flexible_versions: VersionRange,
    pub body: &'static StructSchema,
}

impl MessageSchema {
    pub const fn min_version(&self) -> i16 {
        self.valid_versions.low
    }

    pub const fn max_version(&self) -> i16 {
        self.valid_versions.high
    }

    pub const fn is_flexible(&self, version: i16) -> bool {
        self.flexible_versions.contains(version)
    }

    pub fn ensure_version(&self, version: i16) -> Result<(), crate::ProtocolError> {
        if !self.valid_versions.contains(version) {
            tracing::debug!(api = self.name, version, "rejecting unsupported version");
            return Err(crate::ProtocolError::InvalidVersion {
                api: self.name,
                version,
            });
        }
        Ok(())
    }

    /// Request header version accompanying this message at `version`.
    pub const fn request_header_version(&self, version: i16) -> i16 {
        if self.is_flexible(version) {
            2
        } else {
            1
        }
    }

    /// Response header version accompanying this message at `version`.
    pub const fn response_header_version(&self, version: i16) -> i16 {
        if self.is_flexible(version) {
            1
        } else {
            0
        }
    }
}
