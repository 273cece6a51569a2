#![forbid(unsafe_code)]

use dao_ops_client::{ClientConfig, parse_timeout_ms};
use dao_ops_core::{AddMemberInput, MembershipRole};
use dao_ops_hooks::{DaoForm, ProposalForm, TaskForm};

pub(crate) fn usage() -> &'static str {
    "dao_ops — browse and edit DAOs, proposals and tasks stored in Arkiv\n\n\
USAGE:\n\
  dao_ops [--api-base URL] [--timeout-ms MS] [--token TOKEN] <COMMAND>\n\n\
COMMANDS:\n\
  daos                                   list every DAO\n\
  dao <daoKey>                           one DAO with its members\n\
  board <daoKey> [--proposal KEY]        proposals and tasks of one DAO\n\
  proposals [--dao KEY]                  all proposals, or one DAO's\n\
  proposal <proposalKey>                 one proposal with its tasks\n\
  tasks [--proposal KEY]                 all tasks, or one proposal's\n\
  task <taskKey>                         one task\n\
  create-dao --name N [--description D] [--owner ADDR]\n\
  add-member <daoKey> --user ADDR [--role OWNER|CONTRIBUTOR|VIEWER]\n\
  create-proposal <daoKey> --title T [--description D] [--budget B] [--deadline LOCAL]\n\
  create-task <daoKey> <proposalKey> --title T [--description D] [--budget B] [--deadline LOCAL]\n\n\
ENVIRONMENT:\n\
  DAO_OPS_API_BASE    REST base (default http://localhost:4000)\n\
  DAO_OPS_TIMEOUT_MS  request timeout, 0 = none\n\
  DAO_OPS_API_TOKEN   sent as a bearer token\n\
  RUST_LOG            log filter for stderr (default warn)\n\n\
NOTES:\n\
  - LOCAL deadlines are `YYYY-MM-DDTHH:MM` in this machine's zone for that date.\n\
  - exit code 2 means bad arguments, 1 means the backend call failed.\n"
}

#[derive(Debug, PartialEq)]
pub(crate) enum Command {
    Daos,
    Dao {
        dao_key: String,
    },
    Board {
        dao_key: String,
        proposal: Option<String>,
    },
    Proposals {
        dao: Option<String>,
    },
    Proposal {
        proposal_key: String,
    },
    Tasks {
        proposal: Option<String>,
    },
    Task {
        task_key: String,
    },
    CreateDao(DaoForm),
    AddMember {
        dao_key: String,
        input: AddMemberInput,
    },
    CreateProposal {
        dao_key: String,
        form: ProposalForm,
    },
    CreateTask {
        dao_key: String,
        proposal_key: String,
        form: TaskForm,
    },
}

impl Command {
    /// Raw deadline text of a create command.
    pub(crate) fn deadline(&self) -> Option<&str> {
        match self {
            Command::CreateProposal { form, .. } => Some(form.deadline.as_str()),
            Command::CreateTask { form, .. } => Some(form.deadline.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Cli {
    pub(crate) config: ClientConfig,
    pub(crate) command: Command,
}

#[derive(Debug)]
pub(crate) enum Parsed {
    Help,
    Run(Cli),
}

const VALUE_FLAGS: &[&str] = &[
    "--api-base",
    "--timeout-ms",
    "--token",
    "--proposal",
    "--dao",
    "--name",
    "--description",
    "--owner",
    "--user",
    "--role",
    "--title",
    "--budget",
    "--deadline",
];

#[derive(Default)]
struct Raw {
    positional: Vec<String>,
    flags: Vec<(&'static str, String)>,
}

impl Raw {
    fn flag(&self, name: &str) -> Option<String> {
        self.flags
            .iter()
            .rev()
            .find(|(flag, _)| *flag == name)
            .map(|(_, value)| value.clone())
    }

    fn take_flag(&mut self, name: &str) -> Option<String> {
        let value = self.flag(name);
        self.flags.retain(|(flag, _)| *flag != name);
        value
    }
}

/// `env` resolves environment variables; values are trimmed and blanks ignored.
pub(crate) fn parse_args(
    args: &[String],
    env: impl Fn(&str) -> Option<String>,
) -> Result<Parsed, String> {
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(Parsed::Help);
    }

    let mut raw = Raw::default();
    let mut i = 0usize;
    while i < args.len() {
        let a = args[i].as_str();
        if let Some(flag) = VALUE_FLAGS.iter().find(|flag| **flag == a) {
            i += 1;
            let v = args.get(i).ok_or(format!("{flag} requires a value"))?;
            raw.flags.push((*flag, v.to_string()));
        } else if a.starts_with("--") {
            return Err(format!("unknown flag: {a}\n\n{}", usage()));
        } else {
            raw.positional.push(a.to_string());
        }
        i += 1;
    }

    let config = client_config(&mut raw, env)?;
    let command = command(&mut raw)?;
    if !raw.flags.is_empty() {
        let names = raw
            .flags
            .iter()
            .map(|(flag, _)| *flag)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(format!("flags not accepted by this command: {names}"));
    }
    Ok(Parsed::Run(Cli { config, command }))
}

fn client_config(
    raw: &mut Raw,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig, String> {
    let mut config = ClientConfig::from_lookup(env).map_err(|e| e.to_string())?;
    if let Some(base) = raw.take_flag("--api-base") {
        config = config.with_base_url(&base).map_err(|e| e.to_string())?;
    }
    if let Some(ms) = raw.take_flag("--timeout-ms") {
        config.timeout = parse_timeout_ms(&ms).map_err(|e| e.to_string())?;
    }
    if let Some(token) = raw.take_flag("--token") {
        config = config.with_auth_token(Some(token));
    }
    Ok(config)
}

fn command(raw: &mut Raw) -> Result<Command, String> {
    let positional = std::mem::take(&mut raw.positional);
    let Some((name, rest)) = positional.split_first() else {
        return Err(format!("missing command\n\n{}", usage()));
    };
    let arity = |n: usize, shape: &str| -> Result<(), String> {
        if rest.len() == n {
            Ok(())
        } else {
            Err(format!("usage: dao_ops {name} {shape}"))
        }
    };

    let command = match name.as_str() {
        "daos" => {
            arity(0, "")?;
            Command::Daos
        }
        "dao" => {
            arity(1, "<daoKey>")?;
            Command::Dao {
                dao_key: rest[0].clone(),
            }
        }
        "board" => {
            arity(1, "<daoKey> [--proposal KEY]")?;
            Command::Board {
                dao_key: rest[0].clone(),
                proposal: raw.take_flag("--proposal"),
            }
        }
        "proposals" => {
            arity(0, "[--dao KEY]")?;
            Command::Proposals {
                dao: raw.take_flag("--dao"),
            }
        }
        "proposal" => {
            arity(1, "<proposalKey>")?;
            Command::Proposal {
                proposal_key: rest[0].clone(),
            }
        }
        "tasks" => {
            arity(0, "[--proposal KEY]")?;
            Command::Tasks {
                proposal: raw.take_flag("--proposal"),
            }
        }
        "task" => {
            arity(1, "<taskKey>")?;
            Command::Task {
                task_key: rest[0].clone(),
            }
        }
        "create-dao" => {
            arity(0, "--name N [--description D] [--owner ADDR]")?;
            Command::CreateDao(DaoForm {
                name: raw.take_flag("--name").unwrap_or_default(),
                description: raw.take_flag("--description").unwrap_or_default(),
                owner_address: raw.take_flag("--owner").unwrap_or_default(),
            })
        }
        "add-member" => {
            arity(1, "<daoKey> --user ADDR [--role R]")?;
            let user_address = raw
                .take_flag("--user")
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .ok_or("add-member requires --user ADDR")?;
            let role = match raw.take_flag("--role") {
                Some(r) => Some(
                    MembershipRole::parse(&r)
                        .ok_or(format!("unknown role: {r}"))?,
                ),
                None => None,
            };
            Command::AddMember {
                dao_key: rest[0].clone(),
                input: AddMemberInput { user_address, role },
            }
        }
        "create-proposal" => {
            arity(1, "<daoKey> --title T [--description D] [--budget B] [--deadline LOCAL]")?;
            Command::CreateProposal {
                dao_key: rest[0].clone(),
                form: ProposalForm {
                    title: raw.take_flag("--title").unwrap_or_default(),
                    description: raw.take_flag("--description").unwrap_or_default(),
                    budget: raw.take_flag("--budget").unwrap_or_default(),
                    deadline: raw.take_flag("--deadline").unwrap_or_default(),
                },
            }
        }
        "create-task" => {
            arity(
                2,
                "<daoKey> <proposalKey> --title T [--description D] [--budget B] [--deadline LOCAL]",
            )?;
            Command::CreateTask {
                dao_key: rest[0].clone(),
                proposal_key: rest[1].clone(),
                form: TaskForm {
                    title: raw.take_flag("--title").unwrap_or_default(),
                    description: raw.take_flag("--description").unwrap_or_default(),
                    budget: raw.take_flag("--budget").unwrap_or_default(),
                    deadline: raw.take_flag("--deadline").unwrap_or_default(),
                },
            }
        }
        other => return Err(format!("unknown command: {other}\n\n{}", usage())),
    };
    Ok(command)
}
