/// DDL preamble for the destination tables. Column lists of the INSERT heads
/// in [`crate::models::Table::columns`] must stay in sync with it.
pub const SCHEMA: &str = r#"
# Generated by datuk-sql

SET NAMES 'utf8';

DROP TABLE IF EXISTS `word`;
CREATE TABLE IF NOT EXISTS `word` (
  `id` int(10) NOT NULL AUTO_INCREMENT,
  `word` varchar(500) NOT NULL DEFAULT '',
  `letter` varchar(20) NOT NULL DEFAULT '',
  `root` varchar(500) NOT NULL,
  `literal` varchar(500) NOT NULL,
  PRIMARY KEY (`id`)
) ENGINE=MyISAM DEFAULT CHARSET=utf8;

DROP TABLE IF EXISTS `definition`;
CREATE TABLE IF NOT EXISTS `definition` (
  `id` int(10) NOT NULL AUTO_INCREMENT,
  `definition` varchar(3000) NOT NULL,
  PRIMARY KEY (`id`)
) ENGINE=MyISAM DEFAULT CHARSET=utf8;

DROP TABLE IF EXISTS `relation`;
CREATE TABLE IF NOT EXISTS `relation` (
  `id` int(10) NOT NULL AUTO_INCREMENT,
  `id_word` int(10) NOT NULL DEFAULT '0',
  `id_definition` int(10) NOT NULL DEFAULT '0',
  `rtype` varchar(150) NOT NULL DEFAULT '-',
  PRIMARY KEY (`id`),
  UNIQUE KEY `id_rel` (`id_word`,`id_definition`,`rtype`)
) ENGINE=MyISAM DEFAULT CHARSET=utf8;

"#;
