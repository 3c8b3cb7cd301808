//! Field descriptors driving both rendering and edit dispatch.

/// One of the five form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Gender,
    PassengerClass,
    Parch,
    Sibs,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Age,
        Field::Gender,
        Field::PassengerClass,
        Field::Parch,
        Field::Sibs,
    ];

    /// Key used in the JSON body and as the control's `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Gender => "gender",
            Field::PassengerClass => "pClass",
            Field::Parch => "parch",
            Field::Sibs => "sibs",
        }
    }

    pub fn descriptor(self) -> &'static FieldDescriptor {
        match self {
            Field::Age => &AGE,
            Field::Gender => &GENDER,
            Field::PassengerClass => &PASSENGER_CLASS,
            Field::Parch => &PARCH,
            Field::Sibs => &SIBS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input holding a count or age.
    Numeric { placeholder: &'static str },
    /// Single choice among fixed options.
    Enumerated { options: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: Field,
    pub label: &'static str,
    pub kind: FieldKind,
}

pub const AGE: FieldDescriptor = FieldDescriptor {
    field: Field::Age,
    label: "Age",
    kind: FieldKind::Numeric { placeholder: "Age" },
};

pub const GENDER: FieldDescriptor = FieldDescriptor {
    field: Field::Gender,
    label: "Gender",
    kind: FieldKind::Enumerated {
        options: &["male", "female"],
    },
};

pub const PASSENGER_CLASS: FieldDescriptor = FieldDescriptor {
    field: Field::PassengerClass,
    label: "Passenger Class",
    kind: FieldKind::Enumerated {
        options: &["1", "2", "3"],
    },
};

pub const PARCH: FieldDescriptor = FieldDescriptor {
    field: Field::Parch,
    label: "Number of Parents and Children",
    kind: FieldKind::Numeric {
        placeholder: "Number of ParCh",
    },
};

pub const SIBS: FieldDescriptor = FieldDescriptor {
    field: Field::Sibs,
    label: "Number of Siblings and Spouses",
    kind: FieldKind::Numeric {
        placeholder: "Number of SiSp",
    },
};

/// Layout of the form: personal details on the first row, family on the second.
pub const FORM_ROWS: [&[Field]; 2] = [
    &[Field::Age, Field::Gender, Field::PassengerClass],
    &[Field::Parch, Field::Sibs],
];
