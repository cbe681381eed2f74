//! Declarative form schemas
//!
//! Each create page is driven by a static [`FormSchema`]: an ordered set of
//! field descriptors with the validation rule for each field. Schemas are
//! immutable; all runtime state lives in the form controller.

/// Backend resource a form creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Teacher,
    Student,
    Classroom,
}

impl Resource {
    /// Creation endpoint path on the school backend
    pub fn path(&self) -> &'static str {
        match self {
            Self::Teacher => "/api/teacher",
            Self::Student => "/api/student",
            Self::Classroom => "/api/classroom",
        }
    }
}

/// Allowed values for the gender field
pub const GENDER_OPTIONS: &[&str] = &["L", "P"];

/// Input kind for a field.
///
/// `Number` and `Date` are display hints only: values stay free-form strings
/// and are not range- or format-checked beyond their rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    /// Cycles through a fixed set of values
    Enum(&'static [&'static str]),
    /// Cycles through the fetched class options
    Select,
}

/// Validation rule for a single field, checked on submit only
#[derive(Debug, Clone, Copy)]
pub enum FieldRule {
    MinLen {
        min: usize,
        message: &'static str,
    },
    OneOf {
        allowed: &'static [&'static str],
        message: &'static str,
    },
}

impl FieldRule {
    /// Returns the failure message when `value` does not satisfy the rule
    pub fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Self::MinLen { min, message } => (value.chars().count() < *min).then_some(*message),
            Self::OneOf { allowed, message } => (!allowed.contains(&value)).then_some(*message),
        }
    }
}

/// Descriptor for one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Section heading the field is grouped under
    pub section: &'static str,
    pub kind: FieldKind,
    pub rule: FieldRule,
}

/// Complete schema for one create form
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    pub title: &'static str,
    pub resource: Resource,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether any field needs the class option list
    pub fn has_select(&self) -> bool {
        self.fields.iter().any(|f| f.kind == FieldKind::Select)
    }
}

const PERSONAL: &str = "Informasi pribadi";
const SCHOOL: &str = "Informasi sekolah";

const fn min_len(min: usize, message: &'static str) -> FieldRule {
    FieldRule::MinLen { min, message }
}

/// Schema for the teacher create form
pub static TEACHER_SCHEMA: FormSchema = FormSchema {
    title: "Tambah Data Guru",
    resource: Resource::Teacher,
    fields: &[
        FieldSpec {
            name: "nama_lengkap",
            label: "Nama Lengkap",
            section: PERSONAL,
            kind: FieldKind::Text,
            rule: min_len(2, "Nama wajib untuk diisi"),
        },
        FieldSpec {
            name: "jenis_kelamin",
            label: "Jenis Kelamin",
            section: PERSONAL,
            kind: FieldKind::Enum(GENDER_OPTIONS),
            rule: FieldRule::OneOf {
                allowed: GENDER_OPTIONS,
                message: "Pilih jenis kelamin terlebih dahulu",
            },
        },
        FieldSpec {
            name: "tempat_lahir",
            label: "Tempat Lahir",
            section: PERSONAL,
            kind: FieldKind::Text,
            rule: min_len(2, "Tempat lahir wajib untuk diisi"),
        },
        FieldSpec {
            name: "tanggal_lahir",
            label: "Tanggal Lahir",
            section: PERSONAL,
            kind: FieldKind::Date,
            rule: min_len(2, "Tanggal lahir wajib untuk diisi"),
        },
        FieldSpec {
            name: "alamat",
            label: "Alamat",
            section: PERSONAL,
            kind: FieldKind::Text,
            rule: min_len(2, "Alamat wajib untuk diisi"),
        },
        FieldSpec {
            name: "no_telepon",
            label: "Telepon",
            section: PERSONAL,
            kind: FieldKind::Number,
            rule: min_len(2, "Nomor telepon wajib untuk diisi"),
        },
        FieldSpec {
            name: "pendidikan_tertinggi",
            label: "Pendidikan Tertinggi",
            section: PERSONAL,
            kind: FieldKind::Text,
            rule: min_len(2, "Pendidikan tertinggi wajib untuk diisi"),
        },
        FieldSpec {
            name: "nip",
            label: "NIP",
            section: SCHOOL,
            kind: FieldKind::Number,
            rule: min_len(2, "NIP wajib untuk diisi"),
        },
        FieldSpec {
            name: "email",
            label: "Email Guru",
            section: SCHOOL,
            kind: FieldKind::Text,
            rule: min_len(2, "Email wajib untuk diisi"),
        },
        FieldSpec {
            name: "id_kelas",
            label: "Wali Kelas",
            section: SCHOOL,
            kind: FieldKind::Select,
            rule: min_len(1, "Pilih kelas terlebih dahulu"),
        },
    ],
};

/// Schema for the student create form
pub static STUDENT_SCHEMA: FormSchema = FormSchema {
    title: "Tambah Data Siswa",
    resource: Resource::Student,
    fields: &[
        FieldSpec {
            name: "nama_lengkap",
            label: "Nama Lengkap",
            section: PERSONAL,
            kind: FieldKind::Text,
            rule: min_len(2, "Nama wajib untuk diisi"),
        },
        FieldSpec {
            name: "jenis_kelamin",
            label: "Jenis Kelamin",
            section: PERSONAL,
            kind: FieldKind::Enum(GENDER_OPTIONS),
            rule: FieldRule::OneOf {
                allowed: GENDER_OPTIONS,
                message: "Pilih jenis kelamin terlebih dahulu",
            },
        },
        FieldSpec {
            name: "tempat_lahir",
            label: "Tempat Lahir",
            section: PERSONAL,
            kind: FieldKind::Text,
            rule: min_len(2, "Tempat lahir wajib untuk diisi"),
        },
        FieldSpec {
            name: "tanggal_lahir",
            label: "Tanggal Lahir",
            section: PERSONAL,
            kind: FieldKind::Date,
            rule: min_len(2, "Tanggal lahir wajib untuk diisi"),
        },
        FieldSpec {
            name: "alamat",
            label: "Alamat",
            section: PERSONAL,
            kind: FieldKind::Text,
            rule: min_len(2, "Alamat wajib untuk diisi"),
        },
        FieldSpec {
            name: "no_telepon",
            label: "Telepon",
            section: PERSONAL,
            kind: FieldKind::Number,
            rule: min_len(2, "Nomor telepon wajib untuk diisi"),
        },
        FieldSpec {
            name: "nis",
            label: "NIS",
            section: SCHOOL,
            kind: FieldKind::Number,
            rule: min_len(2, "NIS wajib untuk diisi"),
        },
        FieldSpec {
            name: "email",
            label: "Email Siswa",
            section: SCHOOL,
            kind: FieldKind::Text,
            rule: min_len(2, "Email wajib untuk diisi"),
        },
        FieldSpec {
            name: "id_kelas",
            label: "Kelas",
            section: SCHOOL,
            kind: FieldKind::Select,
            rule: min_len(1, "Pilih kelas terlebih dahulu"),
        },
    ],
};

/// Schema for the classroom create form
pub static CLASSROOM_SCHEMA: FormSchema = FormSchema {
    title: "Tambah Kelas",
    resource: Resource::Classroom,
    fields: &[
        FieldSpec {
            name: "nama_kelas",
            label: "Nama Kelas",
            section: "Informasi kelas",
            kind: FieldKind::Text,
            rule: min_len(2, "Nama kelas wajib untuk diisi"),
        },
        FieldSpec {
            name: "tingkat",
            label: "Tingkat",
            section: "Informasi kelas",
            kind: FieldKind::Number,
            rule: min_len(1, "Tingkat wajib untuk diisi"),
        },
    ],
};
