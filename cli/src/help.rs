//! Help text printed for a missing verb and after errors.

pub const HELP: &str = "\
fastdb - flag-oriented command line for SQLite databases

Usage:
  fastdb --db <file> [command] [arguments]

Commands:
  create --table <name> fields <definitions>
  insert --table <name> values <values>
  update --table <name> set <assignments> where <condition>
  delete --table <name> where <condition>
  select <fields> from <table> [join <table> on <condition>]...
         [where <condition>] [group <columns>] [order <columns>] [limit <count>]
  begin | commit | rollback

Field definitions:
  types:      --int --string --float --bool --date --blob --text
  modifiers:  --pk --ai --notnull --unique --default <literal>
              --fk <table(column)|table.column|table,column>
              --ondelete <action> --onupdate <action>
  actions:    cascade restrict setnull setdefault noaction

Examples:
  Table with a foreign key and delete action:
    fastdb --db app.db create --table clients fields \\
      --int id --pk --ai \\
      --string name --notnull \\
      --int country_id --fk countries(id) --ondelete cascade

  Query with a join:
    fastdb --db app.db select \"c.*, p.name\" from \"clients c\" \\
      join \"countries p\" on \"c.country_id = p.id\" \\
      where \"p.continent = 'America'\"

  Transactions:
    fastdb --db app.db begin
    fastdb --db app.db insert --table sales values \"1, 100.50\"
    fastdb --db app.db commit
";

pub fn print_help() {
    print!("{HELP}");
}
