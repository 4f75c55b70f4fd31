use common::console::PageTarget;
use common::forms::FieldValue;
use common::model::record::{Record, RecordId};
use common::model::record_type::RecordType;
use common::model::schema::FieldSchema;

pub enum Msg {
    TypesLoaded(Result<Vec<RecordType>, String>),
    /// Raw value of the type selector; empty means no selection.
    SelectType(String),
    OpenCreate,
    OpenView,
    CreateSchemaLoaded(RecordType, Result<Vec<FieldSchema>, String>),
    ViewLoaded {
        record_type: RecordType,
        schema: Result<Vec<FieldSchema>, String>,
        records: Result<Vec<Record>, String>,
    },
    CreateInput { name: String, value: FieldValue },
    SubmitCreate,
    CreateFinished(RecordType, Result<(), String>),
    CreateAnother,
    Refresh,
    Refreshed(RecordType, Result<Vec<Record>, String>),
    SearchInput(String),
    SearchSettled(RecordType, u64),
    Page(PageTarget),
    ToggleRow(RecordId),
    EditInput { id: RecordId, name: String, value: FieldValue },
    SubmitUpdate(RecordId),
    UpdateFinished(RecordType, RecordId, Result<(), String>),
    Reconciled(RecordType, RecordId, Result<Vec<Record>, String>),
    Delete(RecordId),
    DeleteFinished(RecordType, RecordId, Result<(), String>),
    DismissNotice,
}
