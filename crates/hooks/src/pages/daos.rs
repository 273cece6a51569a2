#![forbid(unsafe_code)]

use crate::daos::{self, CreateDao, DaoListQuery};
use crate::{DaoForm, Phase, SubmitError, render};
use dao_ops_client::Services;
use dao_ops_core::CreateDaoResponse;

/// The DAO index: every DAO plus the create form.
pub struct DaosPage {
    list: DaoListQuery,
    create: CreateDao,
    pub form: DaoForm,
}

impl DaosPage {
    pub fn new(services: &Services) -> Self {
        Self {
            list: daos::list(&services.daos),
            create: daos::create(&services.daos),
            form: DaoForm::default(),
        }
    }

    pub fn mount(&self) -> Phase {
        self.list.mount()
    }

    pub fn reload(&self) -> Phase {
        self.list.refetch()
    }

    pub fn list(&self) -> &DaoListQuery {
        &self.list
    }

    pub fn create(&self) -> &CreateDao {
        &self.create
    }

    pub fn submit(&mut self) -> Result<CreateDaoResponse, SubmitError> {
        let list = self.list.clone();
        self.form.submit(&self.create, move || {
            list.refetch();
        })
    }

    pub fn render(&self) -> String {
        render::daos_page(self)
    }
}
